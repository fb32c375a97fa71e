//! Domain Layer
//!
//! Contains the member aggregate, value objects, and the directory trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::member::{Member, MemberProfile};
pub use repository::MemberRepository;
