//! Outbound message framing.

use crate::{
    domain::{Room, RoomMessage, Username},
    error::TransportError,
};

/// Result of a `send_content` call.
///
/// Only `Failed` reflects a problem worth logging; the other variants are
/// the silent no-op cases.
#[derive(Debug)]
pub enum SendOutcome {
    /// The frame was written to the bound connection.
    Sent(RoomMessage),
    /// Input was empty after trimming; nothing was sent.
    Empty,
    /// No connection is bound; the message was dropped.
    NotBound,
    /// The transport failed; the connection has been torn down.
    Failed(TransportError),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent(_))
    }
}

/// Turns user-typed text into wire envelopes.
pub struct OutboundFramer;

impl OutboundFramer {
    /// Trim surrounding whitespace; `None` if nothing is left.
    pub fn normalize(text: &str) -> Option<&str> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Frame already-normalized `content` for `room`.
    pub fn frame(room: &Room, username: &Username, content: &str) -> RoomMessage {
        RoomMessage::outbound(room, username, content)
    }
}
