use futures_core::Stream;
use reqwest::{
    Client as HttpClient, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{api_v1::ChatRequest, decode::decode_increments, error::HttpChatError};

/// Minimal HTTP client for the support backend's chat endpoint.
///
/// * One `POST` per customer message, answered by a plain-text body that is
///   read incrementally.
/// * Shares a single `reqwest::Client`, so cloning `ChatEndpointClient` is
///   cheap.
#[derive(Clone, Debug)]
pub struct ChatEndpointClient {
    http: HttpClient,
    url: Url,
}

impl ChatEndpointClient {
    /// Build a default `reqwest` client. No request timeout is applied unless
    /// `timeout` is given.
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, HttpChatError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_http(builder.build()?, url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(http: HttpClient, url: Url) -> Self {
        Self { http, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Post `request` and return the response body as a stream of text
    /// increments.
    ///
    /// Resolves once the endpoint answered with a success status; transport
    /// errors and non-success statuses surface here, decoding errors surface
    /// on the stream.
    pub async fn chat_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<impl Stream<Item = Result<String, HttpChatError>> + Send + 'static, HttpChatError>
    {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));

        let body = serde_json::to_vec(request)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.url, thread_id = %request.thread_id, "posting chat message");

        let resp = self
            .http
            .post(self.url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpChatError::Api { status, body });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %resp.status(), "chat stream opened");

        Ok(decode_increments(resp.bytes_stream()))
    }
}
