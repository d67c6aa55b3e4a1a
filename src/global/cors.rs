use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsPolicy;

/// 설정된 정책으로 CORS 레이어 생성
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
