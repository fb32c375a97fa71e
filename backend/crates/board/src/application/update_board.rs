//! Update Board Use Case
//!
//! Changes title and description. The board type stays as created.

use std::sync::Arc;

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::board_id::BoardId;
use crate::error::{BoardError, BoardResult};

/// Update board input
pub struct UpdateBoardInput {
    pub board_id: BoardId,
    pub title: String,
    pub description: Option<String>,
}

/// Update board use case
pub struct UpdateBoardUseCase<R>
where
    R: BoardRepository,
{
    board_repo: Arc<R>,
}

impl<R> UpdateBoardUseCase<R>
where
    R: BoardRepository,
{
    pub fn new(board_repo: Arc<R>) -> Self {
        Self { board_repo }
    }

    pub async fn execute(&self, input: UpdateBoardInput) -> BoardResult<Board> {
        let mut board = self
            .board_repo
            .find_by_id(input.board_id)
            .await?
            .ok_or(BoardError::NotFound(input.board_id))?;

        board.update_info(&input.title, input.description)?;

        let board = self.board_repo.save(board).await?;

        tracing::info!(board_id = %input.board_id, "Board updated");

        Ok(board)
    }
}
