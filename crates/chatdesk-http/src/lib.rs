//! Streaming HTTP backend for the ChatDesk support widget.
//!
//! [`HttpChatBackend`] posts each customer message as JSON to the support
//! backend's chat endpoint and exposes the plain-text response body as a
//! stream of increments for the core relay.
mod adapter;
mod decode;
mod provider_impl_chat_stream;

pub use adapter::{DEFAULT_ENDPOINT, ENDPOINT_ENV, HttpChatBackend, HttpChatBackendBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::ChatEndpointClient;
