use echo_server::{
    app, config::AppConfig, global::shutdown::shutdown_signal, utils::logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드
    let config = AppConfig::from_env()?;

    // 3. 로깅 초기화
    let _log_guard = init_logging(&config.logging);

    // 4. 라우터 설정
    let addr = config.socket_addr();
    let app = app(AppState::new(config));

    // 5. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
