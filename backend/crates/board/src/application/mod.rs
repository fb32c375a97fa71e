//! Application Layer
//!
//! Board management use cases.

pub mod create_board;
pub mod get_board;
pub mod list_boards;
pub mod update_board;

// Re-exports
pub use create_board::{CreateBoardInput, CreateBoardUseCase};
pub use get_board::GetBoardUseCase;
pub use list_boards::ListBoardsUseCase;
pub use update_board::{UpdateBoardInput, UpdateBoardUseCase};
