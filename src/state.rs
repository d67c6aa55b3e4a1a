use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::echo::{Clock, ContentLogging, EchoService, RequestValidator, SystemClock};

/// 요청 간 공유되는 불변 상태
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub validator: RequestValidator,
    pub echo_service: EchoService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// 시계를 직접 지정하여 상태 생성
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let logging = ContentLogging::new(config.logging.log_message_content);

        Self {
            config: Arc::new(config),
            validator: RequestValidator::new(logging),
            echo_service: EchoService::new(clock, logging),
        }
    }
}
