//! 서버리스 함수 진입점
//!
//! API Gateway / Netlify Functions 프록시 이벤트를 받아 같은 라우터로 처리합니다.

use std::sync::Arc;

use echo_server::{
    adapter::{ApiGatewayAdapter, PlatformAdapter, ProxyEvent, ProxyResponse},
    app,
    config::AppConfig,
    utils::logging::init_logging,
    AppState,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_logging(&config.logging);

    let base_path = config.function_base_path.clone();
    let adapter = Arc::new(ApiGatewayAdapter::new(app(AppState::new(config)), base_path));

    tracing::info!("Lambda handler initializing");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyEvent>| {
        let adapter = Arc::clone(&adapter);
        async move { Ok::<ProxyResponse, Error>(adapter.handle(event.payload).await) }
    }))
    .await
}
