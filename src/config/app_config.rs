use std::env;
use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// 기본 요청 본문 크기 제한 (100 KiB)
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

/// 서버리스 함수 기본 경로
pub const DEFAULT_FUNCTION_BASE_PATH: &str = "/.netlify/functions/api";

/// CORS 허용 정책
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// 모든 Origin, 메서드, 헤더 허용
    Permissive,
    /// 지정된 Origin만 허용
    AllowList(Vec<HeaderValue>),
}

/// 로깅 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// 일별 로그 파일 디렉토리 (없으면 stdout만 사용)
    pub log_dir: Option<String>,
    /// 로그에 메시지 원문을 남길지 여부
    pub log_message_content: bool,
}

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번 만들어져 `AppState`로 전달되며 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub cors: CorsPolicy,
    pub body_limit_bytes: usize,
    pub api_docs_enabled: bool,
    pub function_base_path: String,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::from([0, 0, 0, 0]),
            server_port: 8080,
            cors: CorsPolicy::Permissive,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            api_docs_enabled: false,
            function_base_path: DEFAULT_FUNCTION_BASE_PATH.to_string(),
            logging: LoggingConfig {
                log_dir: None,
                log_message_content: true,
            },
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 로드
    ///
    /// 값이 없는 항목은 기본값을 사용하고, 형식이 잘못된 값은 에러로 처리합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_host = match lookup("SERVER_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.server_host,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.server_port,
        };

        let cors = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_cors_policy(&raw)?,
            None => defaults.cors,
        };

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidBodyLimit),
            },
            None => defaults.body_limit_bytes,
        };

        let api_docs_enabled = match lookup("API_DOCS_ENABLED") {
            Some(raw) => parse_flag("API_DOCS_ENABLED", &raw)?,
            None => defaults.api_docs_enabled,
        };

        let function_base_path = lookup("FUNCTION_BASE_PATH")
            .map(|raw| normalize_base_path(&raw))
            .unwrap_or(defaults.function_base_path);

        let log_message_content = match lookup("LOG_MESSAGE_CONTENT") {
            Some(raw) => parse_flag("LOG_MESSAGE_CONTENT", &raw)?,
            None => defaults.logging.log_message_content,
        };

        let log_dir = lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty());

        if matches!(cors, CorsPolicy::Permissive) {
            tracing::debug!("CORS: 모든 Origin을 허용합니다.");
        }

        Ok(Self {
            server_host,
            server_port,
            cors,
            body_limit_bytes,
            api_docs_enabled,
            function_base_path,
            logging: LoggingConfig {
                log_dir,
                log_message_content,
            },
        })
    }

    /// 서버 바인딩 주소
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_cors_policy(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsPolicy::Permissive);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::AllowList)
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server host: {0}")]
    InvalidHost(String),
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid body limit, expected a positive number of bytes")]
    InvalidBodyLimit,
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
    #[error("Invalid boolean for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },
}
