use std::{future::Future, pin::Pin};

use futures_core::stream::Stream;

use crate::{error::Result, session::ConversationContext};

/// Boxed future returned by [`ChatBackend::open_stream`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Forward-only, non-restartable sequence of text increments.
pub type IncrementStream<'a> = Pin<Box<dyn Stream<Item = Result<String>> + Send + 'a>>;

/// A **backend** turns one customer message into a streaming network call.
///
/// The trait is intentionally minimal:
///
/// * the returned future resolves once the backend has *accepted* the request
///   (connection made, success status seen),
/// * the stream it yields delivers UTF-8 text increments in arrival order.
///
/// Any failure, before or during the stream, is a plain
/// [`ChatDeskError`](crate::error::ChatDeskError). Callers do not
/// distinguish causes.
///
/// The method returns boxed futures and streams so we stay object-safe
/// without pulling in `async_trait`.
pub trait ChatBackend: Send + Sync {
    /// Issue one streaming chat request.
    fn open_stream<'s>(
        &'s self,
        params: ChatParameters,
    ) -> BoxFuture<'s, Result<IncrementStream<'s>>>;
}

impl<B: ChatBackend + ?Sized> ChatBackend for std::sync::Arc<B> {
    fn open_stream<'s>(
        &'s self,
        params: ChatParameters,
    ) -> BoxFuture<'s, Result<IncrementStream<'s>>> {
        (**self).open_stream(params)
    }
}

/// Backend-agnostic request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParameters {
    pub message: String,
    pub thread_id: String,
    pub customer_name: String,
}

impl ChatParameters {
    pub fn new(
        message: impl Into<String>,
        thread_id: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            thread_id: thread_id.into(),
            customer_name: customer_name.into(),
        }
    }

    /// Bundle a trimmed message with the correlation id and customer name held
    /// by `ctx`.
    pub fn from_context(message: impl Into<String>, ctx: &ConversationContext) -> Self {
        Self::new(message, ctx.session_id().as_str(), ctx.customer_name())
    }
}
