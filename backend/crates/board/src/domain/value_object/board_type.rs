use kernel::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_TYPE_FIELD: &str = "boardType";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardTypeError {
    #[error("게시판 타입은 필수입니다.")]
    Missing,

    #[error("지원하지 않는 게시판 타입입니다.")]
    Unknown { code: String },
}

impl From<BoardTypeError> for ValidationError {
    fn from(err: BoardTypeError) -> Self {
        ValidationError::new(BOARD_TYPE_FIELD, err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardType {
    /// Admin-authored announcements
    Notice,
    Free,
    Qna,
    Anonymous,
}

impl BoardType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use BoardType::*;
        match self {
            Notice => "NOTICE",
            Free => "FREE",
            Qna => "QNA",
            Anonymous => "ANONYMOUS",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, BoardTypeError> {
        use BoardType::*;
        match code {
            "" => Err(BoardTypeError::Missing),
            "NOTICE" => Ok(Notice),
            "FREE" => Ok(Free),
            "QNA" => Ok(Qna),
            "ANONYMOUS" => Ok(Anonymous),
            other => Err(BoardTypeError::Unknown {
                code: other.to_string(),
            }),
        }
    }
}

impl FromStr for BoardType {
    type Err = BoardTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim())
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
