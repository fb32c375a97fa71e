//! Member Error Types
//!
//! Member-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

use crate::domain::value_object::{
    email::EmailError, login_id::LoginIdError, nickname::NicknameError, password::PasswordError,
};

/// Member-specific result type alias
pub type MemberResult<T> = Result<T, MemberError>;

/// Message returned for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "서버 오류가 발생했습니다.";

#[derive(Debug, Error)]
pub enum MemberError {
    /// A field failed its value-object rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown login id and wrong password look the same
    #[error("아이디 또는 비밀번호가 올바르지 않습니다.")]
    InvalidCredentials,

    #[error("이미 사용 중인 아이디입니다.")]
    DuplicateLoginId,

    #[error("이미 사용 중인 이메일입니다.")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MemberError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemberError::Validation(_) => ErrorKind::BadRequest,
            MemberError::InvalidCredentials => ErrorKind::Unauthorized,
            MemberError::DuplicateLoginId | MemberError::DuplicateEmail => ErrorKind::Conflict,
            MemberError::Database(_) | MemberError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal details never leave the process.
    pub fn to_app_error(&self) -> AppError {
        match self {
            MemberError::Validation(err) => AppError::from(err.clone()),
            MemberError::InvalidCredentials => AppError::unauthorized(self.to_string()),
            MemberError::DuplicateLoginId | MemberError::DuplicateEmail => {
                AppError::conflict(self.to_string())
            }
            MemberError::Database(_) | MemberError::Internal(_) => {
                AppError::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    fn log(&self) {
        match self {
            MemberError::Database(e) => {
                tracing::error!(error = %e, "Member database error");
            }
            MemberError::Internal(msg) => {
                tracing::error!(message = %msg, "Member internal error");
            }
            MemberError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(kind = %self.kind(), error = %self, "Member error");
            }
        }
    }
}

impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<LoginIdError> for MemberError {
    fn from(err: LoginIdError) -> Self {
        MemberError::Validation(err.into())
    }
}

impl From<NicknameError> for MemberError {
    fn from(err: NicknameError) -> Self {
        MemberError::Validation(err.into())
    }
}

impl From<EmailError> for MemberError {
    fn from(err: EmailError) -> Self {
        MemberError::Validation(err.into())
    }
}

impl From<PasswordError> for MemberError {
    fn from(err: PasswordError) -> Self {
        match err.to_validation_error() {
            Some(validation) => MemberError::Validation(validation),
            None => MemberError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::PasswordHashError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            MemberError::from(LoginIdError::Empty).to_app_error().status_code(),
            400
        );
        assert_eq!(MemberError::InvalidCredentials.to_app_error().status_code(), 401);
        assert_eq!(MemberError::DuplicateLoginId.to_app_error().status_code(), 409);
        assert_eq!(MemberError::DuplicateEmail.to_app_error().status_code(), 409);
        assert_eq!(
            MemberError::Internal("boom".into()).to_app_error().status_code(),
            500
        );
    }

    #[test]
    fn test_validation_keeps_field() {
        let app_err = MemberError::from(EmailError::InvalidFormat).to_app_error();
        assert_eq!(app_err.field(), Some("email"));
        assert_eq!(app_err.message(), "유효한 이메일 형식이 아닙니다.");
    }

    #[test]
    fn test_internal_details_hidden() {
        let app_err = MemberError::Internal("connection refused at 10.0.0.3".into()).to_app_error();
        assert_eq!(app_err.message(), INTERNAL_ERROR_MESSAGE);
        assert_eq!(app_err.field(), None);
    }

    #[test]
    fn test_password_error_conversion() {
        let hash_err = PasswordError::Hash(PasswordHashError::InvalidCost(99));
        assert!(matches!(MemberError::from(hash_err), MemberError::Internal(_)));
    }

    #[test]
    fn test_stable_messages() {
        assert_eq!(
            MemberError::InvalidCredentials.to_string(),
            "아이디 또는 비밀번호가 올바르지 않습니다."
        );
        assert_eq!(
            MemberError::DuplicateLoginId.to_string(),
            "이미 사용 중인 아이디입니다."
        );
        assert_eq!(
            MemberError::DuplicateEmail.to_string(),
            "이미 사용 중인 이메일입니다."
        );
    }
}
