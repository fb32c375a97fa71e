//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::board::Board;
use crate::domain::value_object::board_id::BoardId;
use crate::error::BoardResult;

/// Board repository trait
#[trait_variant::make(BoardRepository: Send)]
pub trait LocalBoardRepository {
    /// Insert a board without identity, or update one that has it
    async fn save(&self, board: Board) -> BoardResult<Board>;

    async fn find_by_id(&self, board_id: BoardId) -> BoardResult<Option<Board>>;

    /// All boards ordered by id ascending
    async fn find_all(&self) -> BoardResult<Vec<Board>>;
}
