//! Domain layer of the chat client.
//!
//! Value objects, the per-client session state machine, and the traits the
//! core uses to reach its collaborators (transport, room directory,
//! presentation). Infrastructure and UI layers implement these traits.

pub mod directory;
pub mod message;
pub mod presenter;
pub mod render;
pub mod room;
pub mod session;
pub mod transport;

pub use directory::RoomDirectory;
#[cfg(test)]
pub use directory::MockRoomDirectory;
pub use message::{FrameCodec, RoomMessage};
pub use presenter::Presenter;
pub use render::{Alignment, Author, RenderDirective};
pub use room::{ANONYMOUS, Room, Username};
pub use session::{ChatLog, ConnectionPhase, ConnectionState, Session};
pub use transport::{
    CloseReason, Connection, ConnectionEvent, ConnectionId, EventSender, Transport, TransportEvent,
};
