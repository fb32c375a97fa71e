//! Field Validation
//!
//! 값 객체 생성/변경 시점에 발생하는 검증 실패를 표현한다.
//! 어느 필드가 어떤 규칙을 어겼는지를 안정적인 메시지와 함께 담는다.

use std::borrow::Cow;

use thiserror::Error;

use crate::error::app_error::AppError;

/// 필드 단위 검증 실패
///
/// `message` 는 호출자/테스트가 그대로 비교하는 고정 문자열이다.
///
/// ## Examples
/// ```rust
/// use kernel::validation::ValidationError;
///
/// let err = ValidationError::new("loginId", "아이디는 필수입니다.");
/// assert_eq!(err.field(), "loginId");
/// assert_eq!(err.to_string(), "아이디는 필수입니다.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: Cow<'static, str>,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// 실패한 필드 이름 (API 필드 이름과 같은 camelCase)
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.message).with_field(err.field)
    }
}
