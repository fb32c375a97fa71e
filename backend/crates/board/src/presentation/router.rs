//! Board Router
//!
//! Who may create or update boards is decided outside this crate.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BoardRepository;
use crate::infra::postgres::PgBoardRepository;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router with PostgreSQL repository
pub fn board_router(repo: PgBoardRepository) -> Router {
    board_router_generic(repo)
}

/// Create a generic Board router for any repository implementation
pub fn board_router_generic<R>(repo: R) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    let state = BoardAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_boards::<R>).post(handlers::create_board::<R>),
        )
        .route(
            "/{board_id}",
            get(handlers::get_board::<R>).put(handlers::update_board::<R>),
        )
        .with_state(state)
}
