//! Gateway types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer that can be selected as the sender of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Outgoing SMS request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,
    pub message: String,
}

/// A message accepted by a sink.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub request: SendSmsRequest,
    pub sent_at: DateTime<Utc>,
}

impl SentMessage {
    pub fn new(request: SendSmsRequest) -> Self {
        Self {
            request,
            sent_at: Utc::now(),
        }
    }
}
