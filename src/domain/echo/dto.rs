use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::validate_not_blank;

/// Echo 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EchoRequest {
    /// 에코할 메시지 (공백만으로 구성될 수 없음)
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Hello")]
    pub message: String,
}

/// Echo 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    /// 요청으로 받은 메시지 원문
    #[schema(example = "Hello")]
    pub original_message: String,

    /// 서버 접두어와 타임스탬프가 붙은 메시지
    #[schema(example = "Server says: \"Hello\" at 2024-01-08T12:34:56.789Z")]
    pub echoed_message: String,

    /// 처리 시각 (ISO-8601, 밀리초, UTC)
    #[schema(example = "2024-01-08T12:34:56.789Z")]
    pub timestamp: String,
}
