//! Pumps backend increments into a [`Renderer`].
//!
//! The relay is the sole consumer of an [`IncrementStream`]. For every
//! increment it appends to an accumulating buffer and pushes the *whole*
//! buffer to [`Renderer::stream_message`], then waits a short pacing interval
//! so the widget can animate. The interval smooths presentation only; no
//! ordering or delivery guarantee depends on it.
//!
//! ```text
//! Idle ──open ok──▶ Streaming ──end──▶ Completed
//!   │                   │
//!   └──open err──▶ Failed ◀──item err──┘
//! ```
//!
//! A failure at any point injects exactly one generic notice. Partial output
//! already shown stays on screen and is not finalised. No retry is attempted.

use std::time::Duration;

use futures_util::StreamExt;

use crate::{
    error::Result,
    provider::{ChatBackend, ChatParameters, IncrementStream},
    renderer::Renderer,
};

/// Pause between two increment deliveries.
pub const DEFAULT_PACING: Duration = Duration::from_millis(15);

/// Relay lifecycle, as drawn in the module docs.
///
/// `Idle` and `Streaming` only exist while a run is in progress. A returned
/// [`RelayReport`] always carries `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// Request issued, no answer yet.
    Idle,
    /// Backend accepted the request; increments are flowing.
    Streaming,
    Completed,
    Failed,
}

/// What a finished relay run delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReport {
    /// Terminal state: [`RelayState::Completed`] or [`RelayState::Failed`].
    pub state: RelayState,
    /// Number of increments pushed to the renderer.
    pub increments: usize,
    /// Accumulated text as last shown.
    pub text: String,
}

impl RelayReport {
    pub fn is_completed(&self) -> bool {
        self.state == RelayState::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRelay {
    pacing: Duration,
}

impl Default for StreamRelay {
    fn default() -> Self {
        Self {
            pacing: DEFAULT_PACING,
        }
    }
}

impl StreamRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the pacing interval. `Duration::ZERO` disables the pause.
    ///
    /// The pause needs a Tokio timer. Outside a Tokio runtime it is skipped
    /// and increments are delivered back to back.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Issue `params` against `backend` and relay whatever comes back.
    pub async fn run<B, R>(
        &self,
        backend: &B,
        params: ChatParameters,
        renderer: &mut R,
        error_notice: &str,
    ) -> RelayReport
    where
        B: ChatBackend + ?Sized,
        R: Renderer,
    {
        let opened = backend.open_stream(params).await;
        self.relay(opened, renderer, error_notice).await
    }

    /// Drive the relay state machine over an already issued request.
    pub async fn relay<R: Renderer>(
        &self,
        opened: Result<IncrementStream<'_>>,
        renderer: &mut R,
        error_notice: &str,
    ) -> RelayReport {
        let mut report = RelayReport {
            state: RelayState::Idle,
            increments: 0,
            text: String::new(),
        };

        let mut stream = match opened {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed before streaming");
                renderer.inject_message(error_notice).await;
                report.state = RelayState::Failed;
                return report;
            }
        };
        report.state = RelayState::Streaming;

        while let Some(item) = stream.next().await {
            match item {
                Ok(delta) => {
                    report.text.push_str(&delta);
                    report.increments += 1;
                    tracing::trace!(len = delta.len(), "relaying increment");
                    renderer.stream_message(&report.text).await;

                    self.pace().await;
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        increments = report.increments,
                        "chat stream failed"
                    );
                    renderer.inject_message(error_notice).await;
                    report.state = RelayState::Failed;
                    return report;
                }
            }
        }

        renderer.end_stream_message().await;
        report.state = RelayState::Completed;
        tracing::debug!(increments = report.increments, "chat stream completed");
        report
    }

    async fn pace(&self) {
        if self.pacing.is_zero() || tokio::runtime::Handle::try_current().is_err() {
            return;
        }
        tokio::time::sleep(self.pacing).await;
    }
}
