//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod log_in;
pub mod seed_admin;
pub mod sign_up;

// Re-exports
pub use config::MemberConfig;
pub use log_in::{LogInInput, LogInUseCase};
pub use seed_admin::{AdminSeedInput, SeedAdminUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
