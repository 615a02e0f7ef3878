//! Fixed bot texts and a tiny builder for composing multi-paragraph
//! messages.
//!
//! ```rust
//! use chatdesk_core::messages::MessageBuilder;
//!
//! let text = MessageBuilder::new()
//!     .add_line("Hi Alice,")
//!     .add_blank_line()
//!     .add_text("How can I help?")
//!     .finalize();
//!
//! assert_eq!(text, "Hi Alice,\n\nHow can I help?");
//! ```

use std::fmt::{Display, Write as _};

pub const DEFAULT_WELCOME: &str =
    "Hello! 👋 Welcome to Pizza Innovation Customer Support. Could you tell me your name?";

pub const DEFAULT_ASSISTANCE: &str = "I'm here to assist you with your queries and provide you \
     with the best possible help. Whether it's about our menu, placing an order, or checking \
     your past orders, feel free to ask.";

pub const DEFAULT_CLOSING: &str = "How can I help you today? 🍕";

pub const DEFAULT_ERROR_NOTICE: &str = "Unable to load model, is your API Key valid?";

/// Fluent helper that appends to an owned `String` buffer.
///
/// Newlines are emitted exactly as requested; nothing is reflowed.
pub struct MessageBuilder {
    buffer: String,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add text without a trailing newline.
    pub fn add_text(mut self, text: impl Display) -> Self {
        write!(self.buffer, "{text}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

/// Texts the flow shows on its own, without asking the backend.
///
/// `Default` carries the Pizza Innovation wording; hosts serving another
/// brand override the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMessages {
    /// Greeting shown when the flow starts; asks for the customer's name.
    pub welcome: String,
    /// Middle paragraph of the personalised greeting.
    pub assistance: String,
    /// Last paragraph of the personalised greeting.
    pub closing: String,
    /// Generic notice injected whenever an exchange with the backend fails.
    pub error_notice: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.to_owned(),
            assistance: DEFAULT_ASSISTANCE.to_owned(),
            closing: DEFAULT_CLOSING.to_owned(),
            error_notice: DEFAULT_ERROR_NOTICE.to_owned(),
        }
    }
}

impl FlowMessages {
    /// Greeting echoing the captured `name`.
    pub fn personalized_greeting(&self, name: &str) -> String {
        MessageBuilder::new()
            .add_line(format_args!("Hi {name},"))
            .add_blank_line()
            .add_line(&self.assistance)
            .add_blank_line()
            .add_text(&self.closing)
            .finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personalized_greeting_matches_widget_wording() {
        let text = FlowMessages::default().personalized_greeting("Alice");
        assert_eq!(
            text,
            "Hi Alice,\n\nI'm here to assist you with your queries and provide you with the best \
             possible help. Whether it's about our menu, placing an order, or checking your past \
             orders, feel free to ask.\n\nHow can I help you today? 🍕"
        );
    }

    #[test]
    fn overridden_texts_are_used() {
        let messages = FlowMessages {
            assistance: "Ask away.".into(),
            closing: "Ready?".into(),
            ..FlowMessages::default()
        };
        assert_eq!(
            messages.personalized_greeting("Bob"),
            "Hi Bob,\n\nAsk away.\n\nReady?"
        );
    }
}
