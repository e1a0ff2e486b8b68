//! Inbound frame routing.
//!
//! Each raw frame is parsed, filtered to the bound room, and classified as
//! self-authored or peer-authored. The router keeps no state and never
//! reorders: one frame in, at most one render directive out.

use std::sync::Arc;

use heya_shared::time::{Clock, timestamp_to_clock_time};

use crate::{
    domain::{FrameCodec, RenderDirective, Room, Username},
    error::FrameError,
};

/// Result of routing one inbound frame.
#[derive(Debug)]
pub enum RouteOutcome {
    /// Display this message.
    Render(RenderDirective),
    /// Presence announcement (`content == ""`); never displayed.
    Presence,
    /// Frame addressed to another room.
    OtherRoom(String),
    /// Not a chat envelope.
    Malformed(FrameError),
}

/// Filters and classifies inbound frames for the bound room.
pub struct MessageRouter {
    codec: Arc<dyn FrameCodec>,
    /// Source of the arrival time shown when a frame has no timestamp
    clock: Arc<dyn Clock>,
}

impl MessageRouter {
    pub fn new(codec: Arc<dyn FrameCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Route a raw frame received while bound to `room` as `username`.
    ///
    /// Rooms are matched by `roomName`; `roomId` is ignored.
    pub fn route(&self, raw: &str, room: &Room, username: &Username) -> RouteOutcome {
        let frame = match self.codec.decode(raw) {
            Ok(frame) => frame,
            Err(e) => return RouteOutcome::Malformed(e),
        };

        if !room.is_named(&frame.room_name) {
            return RouteOutcome::OtherRoom(frame.room_name);
        }

        if frame.is_presence() {
            return RouteOutcome::Presence;
        }

        let timestamp = match frame.timestamp {
            Some(ts) if !ts.is_empty() => ts,
            _ => timestamp_to_clock_time(self.clock.now_millis()),
        };

        let directive = if frame.username == username.as_str() {
            RenderDirective::self_authored(frame.content, timestamp)
        } else {
            RenderDirective::peer(frame.username, frame.content, timestamp)
        };

        RouteOutcome::Render(directive)
    }
}
