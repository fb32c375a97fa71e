//! Error conversions - `AppError` 를 HTTP 응답으로 변환
//!
//! Axum 연동은 feature 로 분리한다.

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// 에러 응답 본문
///
/// ```json
/// {
///   "timestamp": "2024-05-01T12:00:00+00:00",
///   "status": 409,
///   "error": "Conflict",
///   "message": "이미 사용 중인 아이디입니다."
/// }
/// ```
/// 검증 실패일 때만 `"field"` 가 추가된다.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "status": self.status_code(),
            "error": self.kind().as_str(),
            "message": self.message(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::from(field);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::super::app_error::AppError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = AppError::conflict("이미 사용 중인 아이디입니다.").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::bad_request("이메일은 필수입니다.")
            .with_field("email")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
