//! Message types for point-to-point and broadcast delivery

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque message payload, passed through to the target unmodified.
pub type Payload = Map<String, Value>;

/// Delivery outcome of a message.
///
/// `Pending` is transient: `send_message` resolves it to `Delivered` or
/// `Error` before returning, so no message in the processed log is ever
/// observed pending. The variant is kept because the message queue is a
/// historical record and a future decoupled-delivery design would
/// surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Created but not yet resolved (never visible after send returns)
    Pending,
    /// Target existed; its message counter was incremented
    Delivered,
    /// Target was not registered; see `Message::error`
    Error,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Pending => write!(f, "pending"),
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Error => write!(f, "error"),
        }
    }
}

/// One send/broadcast attempt, recorded append-only.
///
/// Messages are never mutated after creation and never deleted for the
/// lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Sending service name — advisory metadata, never validated
    pub source: String,
    /// Target service name
    pub target: String,
    /// Opaque payload
    pub payload: Payload,
    /// When the send was attempted
    pub timestamp: DateTime<Utc>,
    /// Delivery outcome
    pub status: DeliveryStatus,
    /// Error detail, present only when `status` is `Error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Message {
    /// Whether the message reached a registered target.
    pub fn is_delivered(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }
}
