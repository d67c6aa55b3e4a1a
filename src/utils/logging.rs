//! 로깅 초기화 모듈
//!
//! JSON 형식의 구조화된 로깅을 제공합니다.
//! 기본은 stdout이며, `LOG_DIR`이 설정되면 일별 로그 파일에도 동시 출력합니다.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// 기본 로그 필터
pub const DEFAULT_LOG_FILTER: &str = "info,echo_server=debug";

/// 로깅 시스템을 초기화합니다.
///
/// 환경 변수 `RUST_LOG`로 로그 레벨을 설정할 수 있으며 기본값은 [`DEFAULT_LOG_FILTER`]입니다.
/// 파일명 형식: `echo-server.log.YYYY-MM-DD`
///
/// 파일 로깅을 사용하는 경우 반환되는 `WorkerGuard`를 main에서 유지해야
/// 프로세스 종료 시 버퍼링된 로그가 손실되지 않습니다.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let (file_layer, guard) = match config.log_dir.as_deref() {
        Some(log_dir) => {
            let file_appender = rolling::daily(log_dir, "echo-server.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_current_span(true)
                .flatten_event(false)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // 이미 초기화된 경우는 무시
            use std::error::Error;
            if err
                .source()
                .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
                .is_some()
            {
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_should_not_panic() {
        let config = LoggingConfig {
            log_dir: None,
            log_message_content: true,
        };

        assert!(init_logging(&config).is_none());
        assert!(init_logging(&config).is_none());
    }
}
