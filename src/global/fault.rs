use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::utils::error::AppError;

/// 핸들러 panic을 일반 500 응답으로 변환
///
/// panic 내용은 로그에만 남고 응답에는 고정 메시지만 포함됩니다.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal_error(format!("handler panicked: {}", detail)).into_response()
}
