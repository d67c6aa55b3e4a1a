use serde_json::Value;

/// 로그에 메시지 원문을 남길지 결정하는 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLogging {
    include_content: bool,
}

impl ContentLogging {
    pub fn new(include_content: bool) -> Self {
        Self { include_content }
    }

    /// 문자열 메시지를 로그용으로 변환
    pub fn text(&self, content: &str) -> String {
        if self.include_content {
            content.to_string()
        } else {
            format!("<redacted {} chars>", content.chars().count())
        }
    }

    /// 거부된 `message` 값을 로그용으로 변환
    pub fn value(&self, value: Option<&Value>) -> String {
        match value {
            None => "<missing>".to_string(),
            Some(Value::String(content)) => self.text(content),
            Some(other) if self.include_content => other.to_string(),
            Some(other) => format!("<redacted {}>", json_type(other)),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
