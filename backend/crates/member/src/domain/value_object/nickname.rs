//! Nickname Value Object
//!
//! 게시판에 표시되는 회원 이름.
//!
//! ## 불변 조건
//! - NFC 정규화 후 검증 (자모 분리 입력도 완성형 음절로 취급)
//! - 길이: 2〜10자
//! - 한글 음절(가〜힣), ASCII 영문, 숫자만 허용

use std::fmt;

use kernel::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const NICKNAME_MIN_LENGTH: usize = 2;

pub const NICKNAME_MAX_LENGTH: usize = 10;

pub const NICKNAME_FIELD: &str = "nickname";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("닉네임은 필수입니다.")]
    Empty,

    #[error("닉네임은 2자 이상 10자 이하여야 합니다.")]
    InvalidLength { length: usize },

    #[error("닉네임은 한글, 영문, 숫자만 사용 가능합니다.")]
    InvalidCharacter { char: char },
}

impl From<NicknameError> for ValidationError {
    fn from(err: NicknameError) -> Self {
        ValidationError::new(NICKNAME_FIELD, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    pub fn new(input: impl AsRef<str>) -> Result<Self, NicknameError> {
        let value: String = input.as_ref().nfc().collect();

        if value.trim().is_empty() {
            return Err(NicknameError::Empty);
        }

        let length = value.chars().count();
        if !(NICKNAME_MIN_LENGTH..=NICKNAME_MAX_LENGTH).contains(&length) {
            return Err(NicknameError::InvalidLength { length });
        }

        if let Some(char) = value.chars().find(|c| !Self::is_allowed(*c)) {
            return Err(NicknameError::InvalidCharacter { char });
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c)
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = NicknameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}
