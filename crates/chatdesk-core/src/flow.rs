//! The conversation's finite-state machine.
//!
//! ```text
//! Start ──enter──▶ CollectName ──name──▶ Loop ──message──▶ Loop
//! ```
//!
//! Transitions only move forward. `Loop` delegates every message to the
//! backend through the [`StreamRelay`] and stays in `Loop` whatever the
//! outcome; failures turn into a user-visible notice, never into an error
//! returned to the host.
//!
//! [`ConversationFlow::handle_input`] borrows the flow mutably for the whole
//! exchange, so a second input cannot be handled while a reply is still
//! streaming.

use std::fmt::Display;

use crate::{
    messages::FlowMessages,
    provider::{ChatBackend, ChatParameters},
    relay::{RelayReport, StreamRelay},
    renderer::Renderer,
    session::{ConversationContext, SessionId},
    settings::WidgetSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowState {
    Start,
    CollectName,
    Loop,
}

impl FlowState {
    /// The state following `self`. Total and forward-only.
    pub fn next(self) -> Self {
        match self {
            FlowState::Start => FlowState::CollectName,
            FlowState::CollectName | FlowState::Loop => FlowState::Loop,
        }
    }
}

impl Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowState::Start => write!(f, "start"),
            FlowState::CollectName => write!(f, "collect-name"),
            FlowState::Loop => write!(f, "loop"),
        }
    }
}

/// What a single step of the flow produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The welcome message was shown.
    Greeted,
    /// The customer's name was captured and the personalised greeting shown.
    NameCaptured(String),
    /// A backend exchange ran; see the report for success or failure.
    Replied(RelayReport),
    /// Nothing happened (blank message, or `start` called twice).
    Ignored,
}

pub struct ConversationFlow<B> {
    context: ConversationContext,
    state: FlowState,
    backend: B,
    relay: StreamRelay,
    messages: FlowMessages,
}

impl<B: ChatBackend> ConversationFlow<B> {
    /// New flow with a freshly generated session.
    pub fn new(backend: B) -> Self {
        Self::with_context(backend, ConversationContext::new(SessionId::generate()))
    }

    pub fn with_context(backend: B, context: ConversationContext) -> Self {
        Self {
            context,
            state: FlowState::Start,
            backend,
            relay: StreamRelay::default(),
            messages: FlowMessages::default(),
        }
    }

    pub fn with_relay(mut self, relay: StreamRelay) -> Self {
        self.relay = relay;
        self
    }

    pub fn with_messages(mut self, messages: FlowMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Widget settings bound to this flow's session.
    pub fn settings(&self) -> WidgetSettings {
        WidgetSettings::for_session(self.context.session_id())
    }

    /// Enter the flow: show the welcome message and ask for a name.
    pub async fn start<R: Renderer>(&mut self, renderer: &mut R) -> FlowOutcome {
        if self.state != FlowState::Start {
            return FlowOutcome::Ignored;
        }

        renderer.inject_message(&self.messages.welcome).await;
        self.advance();
        FlowOutcome::Greeted
    }

    /// Feed one customer input into the active state's handler.
    pub async fn handle_input<R: Renderer>(
        &mut self,
        input: &str,
        renderer: &mut R,
    ) -> FlowOutcome {
        match self.state {
            FlowState::Start => self.start(renderer).await,
            FlowState::CollectName => {
                let name = input.trim().to_owned();
                let greeting = self.messages.personalized_greeting(&name);
                self.context.set_customer_name(name.clone());
                renderer.inject_message(&greeting).await;
                self.advance();
                FlowOutcome::NameCaptured(name)
            }
            FlowState::Loop => {
                let message = input.trim();
                if message.is_empty() {
                    tracing::debug!("ignoring blank message");
                    return FlowOutcome::Ignored;
                }

                let params = ChatParameters::from_context(message, &self.context);
                let report = self
                    .relay
                    .run(&self.backend, params, renderer, &self.messages.error_notice)
                    .await;

                if !report.is_completed() {
                    self.context.mark_error();
                }
                self.advance();
                FlowOutcome::Replied(report)
            }
        }
    }

    fn advance(&mut self) {
        let next = self.state.next();
        if next != self.state {
            tracing::debug!(from = %self.state, to = %next, "flow transition");
        }
        self.state = next;
    }
}
