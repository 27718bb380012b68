use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiReply;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed alert. Either the request never got a reply, or the Bot API
/// answered with a non-success status.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Telegram request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("Telegram API returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}

impl AlertError {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        AlertError::Transport(err.into())
    }

    /// HTTP status of an API failure. `None` for transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AlertError::Api { status, .. } => Some(*status),
            AlertError::Transport(_) => None,
        }
    }

    /// The `description` field Telegram puts in error replies, if the body
    /// parses as one.
    pub fn api_description(&self) -> Option<String> {
        match self {
            AlertError::Api { body, .. } => serde_json::from_str::<ApiReply>(body)
                .ok()
                .and_then(|r| r.description),
            AlertError::Transport(_) => None,
        }
    }
}

/// The URL is dropped since it carries the bot token.
impl From<reqwest::Error> for AlertError {
    fn from(err: reqwest::Error) -> Self {
        AlertError::Transport(Box::new(err.without_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_api_error_exposes_status_and_description() {
        let err = AlertError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(err.api_description().as_deref(), Some("Unauthorized"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_api_description_none_for_non_json_body() {
        let err = AlertError::Api {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>bad gateway</html>".to_string(),
        };
        assert_eq!(err.api_description(), None);
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let err = AlertError::transport(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(err.status(), None);
        let source = err.source().expect("transport error must carry a source");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source must be the original io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
    }
}
