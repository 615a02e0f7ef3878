//! Settings handed to the host chat widget.
//!
//! The struct serialises into the nested camelCase shape the widget expects,
//! so the host can pass `serde_json::to_value(&settings)?` straight through.

use serde::{Deserialize, Serialize};

use crate::{error::Result, session::SessionId};

pub const HEADER_TITLE: &str = "Customer Support";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    pub chat_history: ChatHistorySettings,
    pub header: HeaderSettings,
    pub footer: FooterSettings,
    pub general: GeneralSettings,
    pub bot_bubble: BotBubbleSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistorySettings {
    /// Namespace for the widget's own history persistence.
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSettings {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSettings {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub embedded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotBubbleSettings {
    /// Let the widget simulate incremental rendering of static bot messages.
    pub sim_stream: bool,
}

impl WidgetSettings {
    /// Default support-widget settings keyed to `session`.
    pub fn for_session(session: &SessionId) -> Self {
        Self {
            chat_history: ChatHistorySettings {
                storage_key: session.storage_key().to_owned(),
            },
            header: HeaderSettings {
                title: HEADER_TITLE.to_owned(),
            },
            footer: FooterSettings {
                text: String::new(),
            },
            general: GeneralSettings { embedded: true },
            bot_bubble: BotBubbleSettings { sim_stream: true },
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_into_widget_shape() {
        let session = SessionId::generate();
        let value = WidgetSettings::for_session(&session).to_json().unwrap();

        assert_eq!(
            value,
            json!({
                "chatHistory": { "storageKey": session.as_str() },
                "header": { "title": "Customer Support" },
                "footer": { "text": "" },
                "general": { "embedded": true },
                "botBubble": { "simStream": true },
            })
        );
    }
}
