use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{Map, Value};

use super::dto::EchoResponse;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 메시지 에코 API 핸들러
///
/// `Content-Type`이 JSON이 아니면 본문을 `{}`로 간주하므로 400으로 응답합니다.
/// 그 외 본문을 읽거나 파싱하지 못한 경우는 500으로 응답합니다.
#[utoipa::path(
    post,
    path = "/v1/echo",
    tag = "Echo",
    request_body = EchoRequest,
    responses(
        (status = 200, body = EchoResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn echo_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EchoResponse>, AppError> {
    // 1. 본문 추출
    let body = match payload {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            tracing::debug!("{}; treating body as empty", rejection.body_text());
            Value::Object(Map::new())
        }
        Err(rejection) => return Err(rejection.into()),
    };

    // 2. 입력값 검증
    let request = state.validator.validate(&body)?;

    // 3. 응답 생성
    Ok(Json(state.echo_service.echo(request.message)))
}
