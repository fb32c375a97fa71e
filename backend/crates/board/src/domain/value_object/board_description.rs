//! Board Description Value Object
//!
//! Optional free text. Absent is valid.

use kernel::validation::ValidationError;
use thiserror::Error;

pub const BOARD_DESCRIPTION_MAX_LENGTH: usize = 200;

pub const BOARD_DESCRIPTION_FIELD: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardDescriptionError {
    #[error("설명은 200자를 초과할 수 없습니다.")]
    TooLong { length: usize },
}

impl From<BoardDescriptionError> for ValidationError {
    fn from(err: BoardDescriptionError) -> Self {
        ValidationError::new(BOARD_DESCRIPTION_FIELD, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardDescription(Option<String>);

impl BoardDescription {
    pub fn new(input: Option<String>) -> Result<Self, BoardDescriptionError> {
        if let Some(description) = &input {
            let length = description.chars().count();
            if length > BOARD_DESCRIPTION_MAX_LENGTH {
                return Err(BoardDescriptionError::TooLong { length });
            }
        }

        Ok(Self(input))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(description: Option<String>) -> Self {
        Self(description)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
