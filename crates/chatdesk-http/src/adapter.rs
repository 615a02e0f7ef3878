use std::{env, sync::Arc, time::Duration};

use chatdesk_core::error::Result;
use reqwest::Url;

use crate::{client::ChatEndpointClient, error::HttpChatError};

/// Route served by the support backend during local development.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";

/// Environment variable read by [`HttpChatBackendBuilder::new_from_env`].
pub const ENDPOINT_ENV: &str = "CHATDESK_ENDPOINT";

/// Wires the HTTP client [`ChatEndpointClient`] into a value that implements
/// [`chatdesk_core::provider::ChatBackend`].
///
/// Cloning is cheap: the client sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    pub(crate) client: Arc<ChatEndpointClient>,
}

impl HttpChatBackend {
    pub fn endpoint(&self) -> &Url {
        self.client.url()
    }
}

/// Builder for [`HttpChatBackend`].
///
/// ```rust,no_run
/// use chatdesk_http::HttpChatBackendBuilder;
///
/// let backend = HttpChatBackendBuilder::new_from_env()
///     .build()
///     .expect("CHATDESK_ENDPOINT must be a valid URL");
/// ```
#[derive(Default)]
pub struct HttpChatBackendBuilder {
    pub(crate) endpoint: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) http: Option<reqwest::Client>,
}

impl HttpChatBackendBuilder {
    /// Create an *empty* builder targeting [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that picks the endpoint up from `CHATDESK_ENDPOINT`, falling
    /// back to [`DEFAULT_ENDPOINT`] when unset.
    pub fn new_from_env() -> Self {
        Self {
            endpoint: env::var(ENDPOINT_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Cap the whole request, body included. Unset by default: a slow
    /// backend keeps the reply open for as long as it streams.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client`. Overrides [`Self::with_timeout`].
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalise the builder and return a ready-to-use backend.
    ///
    /// # Errors
    ///
    /// * [`HttpChatError::InvalidEndpoint`] – the endpoint is not an
    ///   `http`/`https` URL.
    /// * [`HttpChatError::Http`] – the `reqwest` client could not be built.
    pub fn build(self) -> Result<HttpChatBackend> {
        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let url = parse_endpoint(&endpoint)?;

        let client = match self.http {
            Some(http) => ChatEndpointClient::with_http(http, url),
            None => ChatEndpointClient::new(url, self.timeout)?,
        };

        Ok(HttpChatBackend {
            client: Arc::new(client),
        })
    }
}

fn parse_endpoint(endpoint: &str) -> std::result::Result<Url, HttpChatError> {
    let invalid = |reason: String| HttpChatError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatdesk_core::error::ChatDeskError;

    fn invalid_endpoint(err: ChatDeskError) -> bool {
        let ChatDeskError::Backend(source) = err else {
            return false;
        };
        matches!(
            source.downcast_ref::<HttpChatError>(),
            Some(HttpChatError::InvalidEndpoint { .. })
        )
    }

    #[test]
    fn defaults_to_local_backend() {
        let backend = HttpChatBackendBuilder::new().build().unwrap();
        assert_eq!(backend.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn custom_endpoint_and_timeout() {
        let backend = HttpChatBackendBuilder::new()
            .with_endpoint("https://support.example.com/api/chat")
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(backend.endpoint().host_str(), Some("support.example.com"));
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let err = HttpChatBackendBuilder::new()
            .with_endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(invalid_endpoint(err));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = HttpChatBackendBuilder::new()
            .with_endpoint("ftp://example.com/chat")
            .build()
            .unwrap_err();
        assert!(invalid_endpoint(err));
    }
}
