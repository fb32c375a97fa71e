//! Board Title Value Object

use std::fmt;

use kernel::validation::ValidationError;
use thiserror::Error;

pub const BOARD_TITLE_MIN_LENGTH: usize = 2;

pub const BOARD_TITLE_MAX_LENGTH: usize = 50;

pub const BOARD_TITLE_FIELD: &str = "title";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardTitleError {
    #[error("제목은 공백이 불가합니다.")]
    Blank,

    #[error("제목은 2자 이상이어야 합니다.")]
    TooShort { length: usize },

    #[error("제목은 50자를 초과할 수 없습니다.")]
    TooLong { length: usize },
}

impl From<BoardTitleError> for ValidationError {
    fn from(err: BoardTitleError) -> Self {
        ValidationError::new(BOARD_TITLE_FIELD, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTitle(String);

impl BoardTitle {
    pub fn new(input: impl Into<String>) -> Result<Self, BoardTitleError> {
        let title = input.into();

        if title.trim().is_empty() {
            return Err(BoardTitleError::Blank);
        }

        let length = title.chars().count();
        if length < BOARD_TITLE_MIN_LENGTH {
            return Err(BoardTitleError::TooShort { length });
        }
        if length > BOARD_TITLE_MAX_LENGTH {
            return Err(BoardTitleError::TooLong { length });
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
