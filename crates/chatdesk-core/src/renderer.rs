//! Callback surface of the host chat widget.
//!
//! The core never draws anything itself. It drives a [`Renderer`] supplied by
//! the host: a web view bridge, a terminal, or a recorder in tests.

use std::future::Future;

/// Sink for everything the customer gets to see.
pub trait Renderer: Send {
    /// Replace the in-progress bot message with `text` (the full text so far,
    /// not a delta).
    fn stream_message(&mut self, text: &str) -> impl Future<Output = ()> + Send;

    /// Finalise the in-progress message. No further `stream_message` calls
    /// follow for it.
    fn end_stream_message(&mut self) -> impl Future<Output = ()> + Send;

    /// Show a standalone bot message.
    fn inject_message(&mut self, text: &str) -> impl Future<Output = ()> + Send;
}
