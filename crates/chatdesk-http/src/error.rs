use chatdesk_core::error::ChatDeskError;
use reqwest::StatusCode;

/// Every failure mode the HTTP backend can hit.
///
/// The flow shows none of these to the customer; they are folded into
/// [`ChatDeskError::Backend`] and end up in the logs.
#[derive(Debug, thiserror::Error)]
pub enum HttpChatError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("chat endpoint returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("chat endpoint format error: {0}")]
    Format(String),

    #[error("invalid chat endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl From<HttpChatError> for ChatDeskError {
    fn from(value: HttpChatError) -> Self {
        ChatDeskError::Backend(Box::new(value))
    }
}
