//! Chat messages exchanged with the messaging endpoint.

use crate::error::FrameError;

use super::{Room, Username};

/// One chat envelope, identical in both directions.
///
/// An empty `content` is the presence announcement sent once when a
/// connection binds to a room; it is never displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMessage {
    pub room_id: String,
    pub room_name: String,
    pub owner_name: String,
    pub username: String,
    pub content: String,
    /// Server-assigned display time; absent on outbound messages
    pub timestamp: Option<String>,
}

impl RoomMessage {
    /// Build an outbound message for `room` authored by `username`.
    pub fn outbound(room: &Room, username: &Username, content: impl Into<String>) -> Self {
        Self {
            room_id: room.room_id.clone(),
            room_name: room.room_name.clone(),
            owner_name: room.owner_name.clone(),
            username: username.as_str().to_string(),
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn is_presence(&self) -> bool {
        self.content.is_empty()
    }
}

/// Wire format of [`RoomMessage`] on a text-framed connection.
///
/// Implemented by the infrastructure layer; the core only sees raw frames
/// and domain messages.
pub trait FrameCodec: Send + Sync {
    /// Parse one inbound text frame.
    fn decode(&self, raw: &str) -> Result<RoomMessage, FrameError>;

    /// Serialize one outbound message.
    fn encode(&self, message: &RoomMessage) -> Result<String, FrameError>;
}
