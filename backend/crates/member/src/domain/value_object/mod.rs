//! Value Object Module

pub mod email;
pub mod login_id;
pub mod member_id;
pub mod member_role;
pub mod nickname;
pub mod password;
