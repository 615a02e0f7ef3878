//! Provider-agnostic core of the **ChatDesk** customer-support widget.
//!
//! | Module       | What it provides                                                     |
//! |--------------|----------------------------------------------------------------------|
//! | [`session`]  | Per-load [`SessionId`](session::SessionId) and the conversation context |
//! | [`flow`]     | The `start → collect-name → loop` state machine                      |
//! | [`relay`]    | Streams backend increments into the renderer, with pacing           |
//! | [`provider`] | The [`ChatBackend`](provider::ChatBackend) seam implemented by transports |
//! | [`renderer`] | Callback surface of the host widget                                  |
//! | [`settings`] | Serializable widget settings                                         |
//! | [`messages`] | Fixed bot texts                                                      |
//!
//! Backend crates (e.g. `chatdesk-http`) implement [`provider::ChatBackend`];
//! hosts implement [`renderer::Renderer`] and drive a
//! [`ConversationFlow`](flow::ConversationFlow).
pub mod error;
pub mod flow;
pub mod messages;
pub mod provider;
pub mod relay;
pub mod renderer;
pub mod session;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use flow::{ConversationFlow, FlowOutcome, FlowState};
