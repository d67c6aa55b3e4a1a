use serde_json::Value;
use tracing::warn;
use validator::{Validate, ValidationError};

use super::{dto::EchoRequest, log_policy::ContentLogging};
use crate::utils::error::AppError;

/// 공백을 제거한 결과가 비어 있으면 실패
///
/// 검사에만 trim을 사용하며 원본 값은 바꾸지 않습니다.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 요청 본문 검증기
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    logging: ContentLogging,
}

impl RequestValidator {
    pub fn new(logging: ContentLogging) -> Self {
        Self { logging }
    }

    /// 파싱된 JSON 본문에서 `message`를 꺼내 검증합니다.
    ///
    /// `message`가 없거나, 문자열이 아니거나, 공백뿐이면 400 에러를 반환합니다.
    /// 숫자 등 다른 타입을 문자열로 바꾸지 않습니다.
    /// 객체가 아닌 본문(배열, 문자열, 숫자 등)은 `message`가 없는 것으로 보고 400을 반환합니다.
    /// 최상위 스칼라 값을 본문 파싱 단계에서 500으로 거부하는 strict JSON 파서와는 다른 동작입니다.
    pub fn validate(&self, body: &Value) -> Result<EchoRequest, AppError> {
        // 배열은 serde가 필드 순서로 역직렬화하므로 객체에서 직접 꺼냄
        let message = body.as_object().and_then(|fields| fields.get("message"));

        let request = match message {
            Some(Value::String(text)) => EchoRequest {
                message: text.clone(),
            },
            other => {
                warn!(
                    rejected = %self.logging.value(other),
                    reason = "message is missing or not a string",
                    "Validation Error: Message field is required and cannot be empty."
                );
                return Err(AppError::message_required());
            }
        };

        if let Err(err) = request.validate() {
            warn!(
                rejected = %self.logging.text(&request.message),
                reason = %err,
                "Validation Error: Message field is required and cannot be empty."
            );
            return Err(AppError::message_required());
        }

        Ok(request)
    }
}
