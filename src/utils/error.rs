use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use super::response::ErrorResponse;

/// 클라이언트에 노출되는 유일한 서버 에러 메시지
pub const GENERIC_SERVER_ERROR: &str =
    "An unexpected server error occurred. Please try again later.";

/// `message` 검증 실패 메시지
pub const MESSAGE_REQUIRED: &str = "Message field is required.";

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 클라이언트 입력 오류
    #[error("{0}")]
    ValidationError(String),
    /// 요청 본문을 JSON으로 읽지 못함
    #[error("failed to parse request body: {0}")]
    JsonParseFailed(String),
    /// 그 외 예상하지 못한 서버 오류
    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 반환할 메시지
    ///
    /// 서버 오류는 내부 정보를 숨기고 고정 메시지만 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg) => msg,
            AppError::JsonParseFailed(_) | AppError::InternalError(_) => GENERIC_SERVER_ERROR,
        }
    }

    /// 로그용 에러 종류
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::JsonParseFailed(_) => "JSON_PARSE_ERROR",
            AppError::InternalError(_) => "UNEXPECTED_FAULT",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 에러 로깅
        match &self {
            AppError::ValidationError(msg) => {
                debug!(kind = self.kind(), "Rejected request: {}", msg);
            }
            _ => {
                error!(kind = self.kind(), "An unhandled server error occurred: {}", self);
            }
        }

        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// 편의 함수들
impl AppError {
    pub fn message_required() -> Self {
        AppError::ValidationError(MESSAGE_REQUIRED.to_string())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn validation_error_should_be_bad_request() {
        let err = AppError::message_required();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Message field is required.");
    }

    #[test]
    fn server_errors_should_hide_details() {
        let parse = AppError::JsonParseFailed("expected value at line 1 column 2".into());
        let internal = AppError::internal_error("database exploded");

        assert_eq!(parse.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse.message(), GENERIC_SERVER_ERROR);
        assert_eq!(internal.message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn display_should_keep_detail_for_logs() {
        let err = AppError::internal_error("database exploded");

        assert!(err.to_string().contains("database exploded"));
    }

    #[tokio::test]
    async fn internal_error_response_should_use_generic_body() {
        let response = AppError::internal_error("secret detail").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": GENERIC_SERVER_ERROR }));
    }

    #[tokio::test]
    async fn validation_error_response_should_carry_message() {
        let response = AppError::message_required().into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": MESSAGE_REQUIRED }));
    }
}
