//! Board Error Types
//!
//! Board-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

use crate::domain::value_object::{
    board_description::BoardDescriptionError, board_id::BoardId, board_title::BoardTitleError,
    board_type::BoardTypeError,
};

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("게시판을 찾을 수 없습니다. ID: {0}")]
    NotFound(BoardId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::Validation(_) => ErrorKind::BadRequest,
            BoardError::NotFound(_) => ErrorKind::NotFound,
            BoardError::Database(_) | BoardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BoardError::Validation(err) => AppError::from(err.clone()),
            BoardError::Database(_) | BoardError::Internal(_) => {
                AppError::internal("서버 오류가 발생했습니다.")
            }
            BoardError::NotFound(_) => AppError::not_found(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BoardError::Database(e) => {
                tracing::error!(error = %e, "Board database error");
            }
            BoardError::Internal(msg) => {
                tracing::error!(message = %msg, "Board internal error");
            }
            _ => {
                tracing::debug!(kind = %self.kind(), error = %self, "Board error");
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<BoardTitleError> for BoardError {
    fn from(err: BoardTitleError) -> Self {
        BoardError::Validation(err.into())
    }
}

impl From<BoardDescriptionError> for BoardError {
    fn from(err: BoardDescriptionError) -> Self {
        BoardError::Validation(err.into())
    }
}

impl From<BoardTypeError> for BoardError {
    fn from(err: BoardTypeError) -> Self {
        BoardError::Validation(err.into())
    }
}
