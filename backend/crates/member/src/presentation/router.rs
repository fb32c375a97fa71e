//! Member Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::MemberConfig;
use crate::domain::repository::MemberRepository;
use crate::infra::postgres::PgMemberRepository;
use crate::presentation::handlers::{self, MemberAppState};

/// Create the Member router with PostgreSQL repository
pub fn member_router(repo: PgMemberRepository, config: MemberConfig) -> Router {
    member_router_generic(repo, config)
}

/// Create a generic Member router for any repository implementation
pub fn member_router_generic<R>(repo: R, config: MemberConfig) -> Router
where
    R: MemberRepository + Clone + Send + Sync + 'static,
{
    let state = MemberAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .with_state(state)
}
