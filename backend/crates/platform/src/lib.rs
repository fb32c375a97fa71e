//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (bcrypt)
//! - Environment-driven server configuration

pub mod config;
pub mod password;
