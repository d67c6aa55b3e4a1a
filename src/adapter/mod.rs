//! 호스팅 플랫폼 이벤트와 HTTP 요청/응답 사이의 변환 계층
//!
//! 검증/변환 로직은 플랫폼을 알지 못하며, 각 호스팅 환경은
//! [`PlatformAdapter`]를 구현하여 자신의 이벤트를 라우터로 전달합니다.

pub mod api_gateway;

use async_trait::async_trait;

pub use api_gateway::{AdapterError, ApiGatewayAdapter, ProxyEvent, ProxyResponse};

/// 플랫폼 이벤트 하나를 응답 하나로 처리하는 어댑터
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    type Event: Send + 'static;
    type Output: Send + 'static;

    /// 실패하더라도 항상 완성된 응답을 반환합니다.
    async fn handle(&self, event: Self::Event) -> Self::Output;
}
