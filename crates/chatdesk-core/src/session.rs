//! Per-load session identity and the conversation context that travels with
//! it.
//!
//! A [`SessionId`] is generated once when the host application starts and is
//! reused as the backend correlation id (`thread_id`) and as the storage key
//! for the widget's own history persistence. Nothing here is written to disk:
//! a fresh load gets a fresh id.

use std::fmt::Display;

use uuid::Uuid;

/// Opaque, random per-load identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random (v4) identifier and log it.
    pub fn generate() -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::info!(thread_id = %id, "generated thread_id");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace under which the host renderer persists visible history.
    pub fn storage_key(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Explicit state shared by the flow controller and the backend request.
///
/// * `session_id` – fixed for the lifetime of the context.
/// * `customer_name` – empty until the name has been collected, then
///   read-only.
/// * `has_error` – sticky: set on the first failed exchange and never cleared.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    session_id: SessionId,
    customer_name: String,
    has_error: bool,
}

impl ConversationContext {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            customer_name: String::new(),
            has_error: false,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub(crate) fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub(crate) fn mark_error(&mut self) {
        self.has_error = true;
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new(SessionId::generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_a_hyphenated_uuid() {
        let id = SessionId::generate();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.as_str().len(), 36);
        assert_eq!(id.storage_key(), id.as_str());
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn two_loads_get_different_ids() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn error_flag_is_sticky() {
        let mut ctx = ConversationContext::default();
        assert!(!ctx.has_error());
        ctx.mark_error();
        ctx.set_customer_name("Alice");
        assert!(ctx.has_error());
        assert_eq!(ctx.customer_name(), "Alice");
    }
}
