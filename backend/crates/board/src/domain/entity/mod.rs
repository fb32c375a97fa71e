//! Entity Module

pub mod board;
