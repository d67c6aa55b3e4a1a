pub mod adapter;
pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use config::AppConfig;

pub const ECHO_PATH: &str = "/v1/echo";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::echo::handler::echo_handler,
    ),
    components(
        schemas(
            domain::echo::dto::EchoRequest,
            domain::echo::dto::EchoResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Echo", description = "메시지 에코 API")
    )
)]
pub struct ApiDoc;

/// 애플리케이션 라우터 생성
pub fn app(state: AppState) -> Router {
    let mut router = Router::new().route(ECHO_PATH, post(domain::echo::echo_handler));

    if state.config.api_docs_enabled {
        router = router.route(OPENAPI_PATH, get(openapi_json));
    }

    let config = state.config.clone();
    with_middleware(router, &config).with_state(state)
}

/// 공통 미들웨어 적용
///
/// 바깥쪽부터 request id 부여, request id 응답 복사, trace, CORS, panic 처리, 본문 크기 제한 순입니다.
pub fn with_middleware(router: Router<AppState>, config: &AppConfig) -> Router<AppState> {
    router
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CatchPanicLayer::custom(global::fault::handle_panic))
        .layer(global::cors::cors_layer(&config.cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(global::middleware::request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(global::middleware::propagate_request_id())
        .layer(global::middleware::set_request_id())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
