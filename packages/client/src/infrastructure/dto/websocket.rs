//! WebSocket message DTOs.

use serde::{Deserialize, Serialize};

/// Chat envelope, identical in both directions.
///
/// An empty `content` is the presence announcement sent once when a
/// connection binds to a room; it is never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub room_id: String,
    pub room_name: String,
    pub owner_name: String,
    pub username: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    pub fn is_presence(&self) -> bool {
        self.content.is_empty()
    }
}
