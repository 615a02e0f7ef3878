//! # `chatdesk` – The umbrella crate
//!
//! One-stop import for the ChatDesk customer-support widget:
//!
//! | Crate               | What it provides                                                          |
//! |---------------------|---------------------------------------------------------------------------|
//! | **`chatdesk-core`** | Session id, conversation flow, stream relay, renderer and backend traits  |
//! | **`chatdesk-http`** | Streaming HTTP client that implements `ChatBackend` *(optional)*          |
//!
//! The `http` Cargo feature (on by default) re-exports the HTTP backend so a
//! single dependency line is enough:
//!
//! ```toml
//! [dependencies]
//! chatdesk = { version = "0.1", features = ["http"] }
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use chatdesk::{ConversationFlow, renderer::Renderer};
//!
//! struct Stdout;
//!
//! impl Renderer for Stdout {
//!     async fn stream_message(&mut self, text: &str) { print!("\r{text}"); }
//!     async fn end_stream_message(&mut self) { println!(); }
//!     async fn inject_message(&mut self, text: &str) { println!("{text}"); }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = chatdesk::http::HttpChatBackendBuilder::new_from_env().build()?;
//!     let mut flow = ConversationFlow::new(backend);
//!     let mut screen = Stdout;
//!
//!     flow.start(&mut screen).await;
//!     flow.handle_input("Alice", &mut screen).await;
//!     flow.handle_input("What's on the menu?", &mut screen).await;
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/chatdesk/latest")]

pub use chatdesk_core::*;

#[cfg(feature = "http")]
pub use chatdesk_http as http;
