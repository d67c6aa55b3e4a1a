//! API Gateway (REST, payload v1) / Netlify Functions 프록시 이벤트 어댑터

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, Uri},
    response::Response,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tracing::{debug, error};

use super::PlatformAdapter;
use crate::utils::error::GENERIC_SERVER_ERROR;

/// 프록시 통합 요청 이벤트
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// 프록시 통합 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// 변환 실패 시 반환하는 일반 500 응답
    pub fn server_error() -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            header::CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        );

        Self {
            status_code: 500,
            headers,
            body: serde_json::json!({ "error": GENERIC_SERVER_ERROR }).to_string(),
            is_base64_encoded: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
    #[error("invalid request path: {0}")]
    InvalidPath(String),
    #[error("invalid base64 body: {0}")]
    InvalidBody(#[from] base64::DecodeError),
    #[error("failed to build request: {0}")]
    InvalidRequest(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
}

/// 프록시 이벤트를 라우터로 전달하는 어댑터
#[derive(Clone)]
pub struct ApiGatewayAdapter {
    router: Router,
    base_path: String,
}

impl ApiGatewayAdapter {
    /// `base_path`는 라우팅 전에 이벤트 경로에서 제거됩니다. (예: `/.netlify/functions/api`)
    pub fn new(router: Router, base_path: impl Into<String>) -> Self {
        Self {
            router,
            base_path: base_path.into(),
        }
    }

    async fn dispatch(&self, event: ProxyEvent) -> Result<ProxyResponse, AdapterError> {
        let request = self.build_request(event)?;
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});
        into_proxy_response(response).await
    }

    fn build_request(&self, event: ProxyEvent) -> Result<Request<Body>, AdapterError> {
        let method = Method::from_bytes(event.http_method.to_ascii_uppercase().as_bytes())
            .map_err(|_| AdapterError::InvalidMethod(event.http_method.clone()))?;

        let path = resolve_path(&event.path, &self.base_path);
        let uri: Uri = path
            .parse()
            .map_err(|_| AdapterError::InvalidPath(path.clone()))?;

        let body = match event.body {
            Some(body) if event.is_base64_encoded => STANDARD.decode(body.as_bytes())?,
            Some(body) => body.into_bytes(),
            None => Vec::new(),
        };

        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in event.headers.unwrap_or_default() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => builder = builder.header(name, value),
                _ => debug!(header = %name, "Skipping invalid header"),
            }
        }

        builder
            .body(Body::from(body))
            .map_err(|e| AdapterError::InvalidRequest(e.to_string()))
    }
}

#[async_trait]
impl PlatformAdapter for ApiGatewayAdapter {
    type Event = ProxyEvent;
    type Output = ProxyResponse;

    async fn handle(&self, event: ProxyEvent) -> ProxyResponse {
        match self.dispatch(event).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "Failed to translate platform event");
                ProxyResponse::server_error()
            }
        }
    }
}

/// 함수 기본 경로를 제거한 라우팅 경로
fn resolve_path(path: &str, base_path: &str) -> String {
    let stripped = if base_path.is_empty() {
        path
    } else {
        path.strip_prefix(base_path)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(path)
    };

    if stripped.starts_with('/') {
        stripped.to_string()
    } else {
        format!("/{}", stripped)
    }
}

async fn into_proxy_response(response: Response) -> Result<ProxyResponse, AdapterError> {
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|e| AdapterError::ResponseBody(e.to_string()))?
        .to_bytes();

    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in parts.headers.iter() {
        let Ok(value) = value.to_str() else {
            continue;
        };
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    let (body, is_base64_encoded) = match std::str::from_utf8(&bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => (STANDARD.encode(&bytes), true),
    };

    Ok(ProxyResponse {
        status_code: parts.status.as_u16(),
        headers,
        body,
        is_base64_encoded,
    })
}
