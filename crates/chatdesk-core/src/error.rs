//! Unified error type exposed by **`chatdesk-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before handing them to the [`StreamRelay`](crate::relay::StreamRelay).
//! The relay never shows them to the customer; they only reach the logs.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ChatDeskError>;

#[derive(Debug, Error)]
pub enum ChatDeskError {
    /// Failure while serialising or deserialising JSON payloads exchanged
    /// with the backend or the host widget.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error (transport, status,
    /// malformed body).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
