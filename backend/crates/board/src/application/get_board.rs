//! Get Board Use Case

use std::sync::Arc;

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::board_id::BoardId;
use crate::error::{BoardError, BoardResult};

pub struct GetBoardUseCase<R>
where
    R: BoardRepository,
{
    board_repo: Arc<R>,
}

impl<R> GetBoardUseCase<R>
where
    R: BoardRepository,
{
    pub fn new(board_repo: Arc<R>) -> Self {
        Self { board_repo }
    }

    pub async fn execute(&self, board_id: BoardId) -> BoardResult<Board> {
        self.board_repo
            .find_by_id(board_id)
            .await?
            .ok_or(BoardError::NotFound(board_id))
    }
}
