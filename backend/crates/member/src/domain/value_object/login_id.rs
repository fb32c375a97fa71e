//! Login ID Value Object
//!
//! 로그인에 사용하는 회원 식별 문자열.
//!
//! ## 불변 조건
//! - 공백만으로 이루어질 수 없음
//! - 길이: 4〜20자
//! - ASCII 영문 대소문자와 숫자만 허용
//!
//! 입력은 정규화하지 않는다. 검증을 통과한 원문 그대로 보관한다.

use std::fmt;

use kernel::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

pub const LOGIN_ID_MIN_LENGTH: usize = 4;

pub const LOGIN_ID_MAX_LENGTH: usize = 20;

/// API 필드 이름
pub const LOGIN_ID_FIELD: &str = "loginId";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginIdError {
    #[error("아이디는 필수입니다.")]
    Empty,

    #[error("아이디는 4자 이상 20자 이하여야 합니다.")]
    InvalidLength { length: usize },

    #[error("아이디는 영문과 숫자만 사용 가능합니다.")]
    InvalidCharacter { char: char },
}

impl From<LoginIdError> for ValidationError {
    fn from(err: LoginIdError) -> Self {
        ValidationError::new(LOGIN_ID_FIELD, err.to_string())
    }
}

// ============================================================================
// LoginId Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoginId(String);

impl LoginId {
    /// Validate in order: blank, length, charset
    pub fn new(input: impl Into<String>) -> Result<Self, LoginIdError> {
        let value = input.into();

        if value.trim().is_empty() {
            return Err(LoginIdError::Empty);
        }

        let length = value.chars().count();
        if !(LOGIN_ID_MIN_LENGTH..=LOGIN_ID_MAX_LENGTH).contains(&length) {
            return Err(LoginIdError::InvalidLength { length });
        }

        if let Some(char) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(LoginIdError::InvalidCharacter { char });
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LoginId {
    type Error = LoginIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoginId> for String {
    fn from(login_id: LoginId) -> Self {
        login_id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_ids_round_trip() {
        for raw in ["user", "user1", "ABCD", "a1B2c3D4e5F6g7H8i9J0"] {
            let login_id = LoginId::new(raw).unwrap();
            assert_eq!(login_id.as_str(), raw);
        }
    }

    #[test]
    fn test_blank() {
        assert_eq!(LoginId::new("").unwrap_err(), LoginIdError::Empty);
        assert_eq!(LoginId::new("    ").unwrap_err(), LoginIdError::Empty);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            LoginId::new("abc").unwrap_err(),
            LoginIdError::InvalidLength { length: 3 }
        );
        assert!(LoginId::new("a".repeat(LOGIN_ID_MAX_LENGTH)).is_ok());
        assert_eq!(
            LoginId::new("a".repeat(LOGIN_ID_MAX_LENGTH + 1)).unwrap_err(),
            LoginIdError::InvalidLength { length: 21 }
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            LoginId::new("user_01").unwrap_err(),
            LoginIdError::InvalidCharacter { char: '_' }
        );
        assert_eq!(
            LoginId::new("user 01").unwrap_err(),
            LoginIdError::InvalidCharacter { char: ' ' }
        );
        // Hangul is not alphanumeric ASCII
        assert!(matches!(
            LoginId::new("회원아이디"),
            Err(LoginIdError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_length_checked_before_charset() {
        assert_eq!(
            LoginId::new("a_b").unwrap_err(),
            LoginIdError::InvalidLength { length: 3 }
        );
    }

    #[test]
    fn test_stable_messages() {
        assert_eq!(LoginIdError::Empty.to_string(), "아이디는 필수입니다.");
        assert_eq!(
            LoginIdError::InvalidLength { length: 2 }.to_string(),
            "아이디는 4자 이상 20자 이하여야 합니다."
        );
        assert_eq!(
            LoginIdError::InvalidCharacter { char: '!' }.to_string(),
            "아이디는 영문과 숫자만 사용 가능합니다."
        );
    }

    #[test]
    fn test_into_validation_error() {
        let err: ValidationError = LoginId::new("ab").unwrap_err().into();
        assert_eq!(err.field(), "loginId");
        assert_eq!(err.message(), "아이디는 4자 이상 20자 이하여야 합니다.");
    }

    #[test]
    fn test_serde() {
        let login_id: LoginId = serde_json::from_str("\"user1\"").unwrap();
        assert_eq!(serde_json::to_string(&login_id).unwrap(), "\"user1\"");
        assert!(serde_json::from_str::<LoginId>("\"u!\"").is_err());
    }
}
