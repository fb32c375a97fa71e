//! Create Board Use Case

use std::sync::Arc;

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::board_type::BoardType;
use crate::error::BoardResult;

/// Create board input
pub struct CreateBoardInput {
    pub title: String,
    pub description: Option<String>,
    pub board_type: String,
}

/// Create board use case
pub struct CreateBoardUseCase<R>
where
    R: BoardRepository,
{
    board_repo: Arc<R>,
}

impl<R> CreateBoardUseCase<R>
where
    R: BoardRepository,
{
    pub fn new(board_repo: Arc<R>) -> Self {
        Self { board_repo }
    }

    pub async fn execute(&self, input: CreateBoardInput) -> BoardResult<Board> {
        let board_type: BoardType = input.board_type.parse()?;
        let board = Board::create(&input.title, input.description, board_type)?;

        let board = self.board_repo.save(board).await?;

        tracing::info!(
            board_id = ?board.board_id(),
            board_type = %board.board_type(),
            "Board created"
        );

        Ok(board)
    }
}
