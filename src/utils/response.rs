use serde::Serialize;
use utoipa::ToSchema;

/// 에러 응답 구조체
///
/// 형식:
/// ```json
/// { "error": "Message field is required." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Message field is required.")]
    pub error: String,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
