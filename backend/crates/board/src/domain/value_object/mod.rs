//! Value Object Module

pub mod board_description;
pub mod board_id;
pub mod board_title;
pub mod board_type;
