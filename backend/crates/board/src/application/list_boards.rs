//! List Boards Use Case

use std::sync::Arc;

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::error::BoardResult;

pub struct ListBoardsUseCase<R>
where
    R: BoardRepository,
{
    board_repo: Arc<R>,
}

impl<R> ListBoardsUseCase<R>
where
    R: BoardRepository,
{
    pub fn new(board_repo: Arc<R>) -> Self {
        Self { board_repo }
    }

    pub async fn execute(&self) -> BoardResult<Vec<Board>> {
        self.board_repo.find_all().await
    }
}
