//! Member Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Member aggregate, value objects, directory trait
//! - `application/` - Sign up, log in and admin seeding use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Credential rules
//! - Login id: 4-20 ASCII letters/digits
//! - Nickname: 2-10 Hangul syllables, letters or digits (NFC)
//! - Email: `local@domain.tld`
//! - Password: 8+ chars mixing two of letter/digit/special, stored as bcrypt
//!
//! ## Security Model
//! - Passwords are only ever held hashed; matching is constant-time
//! - Unknown login id and wrong password are indistinguishable to callers
//! - Login id and email uniqueness is enforced by storage, pre-checked by sign up

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::MemberConfig;
pub use error::{MemberError, MemberResult};
pub use infra::postgres::PgMemberRepository;
pub use presentation::router::member_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
