use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A settled HTTP reply, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Header value as text. `None` if absent or not visible ASCII; the raw
    /// bytes are still in `headers`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

// --- Bot API envelope ---

#[derive(Debug, Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    pub result: Option<serde_json::Value>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl ApiReply {
    /// `result.message_id` of a successful sendMessage.
    pub fn message_id(&self) -> Option<i64> {
        self.result
            .as_ref()
            .and_then(|r| r.get("message_id"))
            .and_then(|v| v.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_parse_send_message_reply() {
        let resp = HttpResponse {
            status: StatusCode::OK,
            headers: json_headers(),
            body: r#"{"ok":true,"result":{"message_id":42,"chat":{"id":-100},"text":"hi"}}"#
                .to_string(),
        };
        let reply: ApiReply = resp.json().unwrap();
        assert!(reply.ok);
        assert_eq!(reply.message_id(), Some(42));
        assert_eq!(reply.description, None);
    }

    #[test]
    fn test_parse_error_reply() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.error_code, Some(400));
        assert_eq!(reply.message_id(), None);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = HttpResponse {
            status: StatusCode::OK,
            headers: json_headers(),
            body: String::new(),
        };
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }
}
