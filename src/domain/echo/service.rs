use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use super::{dto::EchoResponse, log_policy::ContentLogging};

/// 현재 시각 공급자
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// ISO-8601 형식 (밀리초, `Z` 접미사)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `Server says: "<message>" at <timestamp>`
pub fn echoed_message(message: &str, timestamp: &str) -> String {
    format!("Server says: \"{}\" at {}", message, timestamp)
}

#[derive(Clone)]
pub struct EchoService {
    clock: Arc<dyn Clock>,
    logging: ContentLogging,
}

impl EchoService {
    pub fn new(clock: Arc<dyn Clock>, logging: ContentLogging) -> Self {
        Self { clock, logging }
    }

    /// 검증된 메시지로 응답을 만듭니다.
    pub fn echo(&self, message: String) -> EchoResponse {
        let timestamp = format_timestamp(self.clock.now());
        let echoed = echoed_message(&message, &timestamp);

        info!(
            original = %self.logging.text(&message),
            echoed = %self.logging.text(&echoed),
            "Successfully processed message"
        );

        EchoResponse {
            original_message: message,
            echoed_message: echoed,
            timestamp,
        }
    }
}
