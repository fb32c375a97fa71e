//! Board Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Board entity, value objects, repository trait
//! - `application/` - Create / get / list / update use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{BoardError, BoardResult};
pub use infra::postgres::PgBoardRepository;
pub use presentation::router::board_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
