//! JSON wire format for chat frames.

use crate::{
    domain::{FrameCodec, RoomMessage},
    error::FrameError,
    infrastructure::dto::websocket::ChatMessage,
};

/// Frames are camelCase JSON objects (see [`ChatMessage`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrameCodec;

impl FrameCodec for JsonFrameCodec {
    fn decode(&self, raw: &str) -> Result<RoomMessage, FrameError> {
        serde_json::from_str::<ChatMessage>(raw)
            .map(RoomMessage::from)
            .map_err(|e| FrameError::Malformed(e.to_string()))
    }

    fn encode(&self, message: &RoomMessage) -> Result<String, FrameError> {
        serde_json::to_string(&ChatMessage::from(message))
            .map_err(|e| FrameError::Encode(e.to_string()))
    }
}
