use chatdesk_core::provider::ChatParameters;
use serde::{Deserialize, Serialize};

/// JSON body posted to the chat endpoint.
///
/// ```json
/// { "message": "…", "thread_id": "…", "customer_name": "…", "responseType": "stream" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub thread_id: String,
    pub customer_name: String,
    #[serde(rename = "responseType")]
    pub response_type: ResponseType,
}

/// Delivery mode requested from the endpoint. Only incremental delivery is
/// supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    Stream,
}

impl From<ChatParameters> for ChatRequest {
    fn from(value: ChatParameters) -> Self {
        Self {
            message: value.message,
            thread_id: value.thread_id,
            customer_name: value.customer_name,
            response_type: ResponseType::Stream,
        }
    }
}
