//! Entity Module

pub mod member;
