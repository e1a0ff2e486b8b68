//! Per-client session state.

use std::fmt;

use super::{CloseReason, Connection, ConnectionId, RenderDirective, Room, Username};

/// Connection state machine: `Idle → Connecting → Bound → Closed`.
///
/// `Closed` behaves like `Idle` for the next `bind_room`; there is no way
/// back to `Bound` without a fresh connection.
pub enum ConnectionState {
    Idle,
    /// Transport open, presence frame not yet sent.
    Connecting {
        id: ConnectionId,
        room: Room,
        connection: Box<dyn Connection>,
    },
    /// Presence frame sent; content may flow both ways.
    Bound {
        id: ConnectionId,
        room: Room,
        connection: Box<dyn Connection>,
    },
    Closed {
        reason: CloseReason,
    },
}

/// Data-free view of [`ConnectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Idle,
    Connecting,
    Bound,
    Closed,
}

impl ConnectionState {
    pub fn phase(&self) -> ConnectionPhase {
        match self {
            ConnectionState::Idle => ConnectionPhase::Idle,
            ConnectionState::Connecting { .. } => ConnectionPhase::Connecting,
            ConnectionState::Bound { .. } => ConnectionPhase::Bound,
            ConnectionState::Closed { .. } => ConnectionPhase::Closed,
        }
    }

    /// Id of the live connection, if any.
    pub fn connection_id(&self) -> Option<ConnectionId> {
        match self {
            ConnectionState::Connecting { id, .. } | ConnectionState::Bound { id, .. } => {
                Some(*id)
            }
            _ => None,
        }
    }

    /// The room selected for the live connection, if any.
    pub fn room(&self) -> Option<&Room> {
        match self {
            ConnectionState::Connecting { room, .. } | ConnectionState::Bound { room, .. } => {
                Some(room)
            }
            _ => None,
        }
    }
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Idle => f.write_str("Idle"),
            ConnectionState::Connecting { id, room, .. } => f
                .debug_struct("Connecting")
                .field("id", id)
                .field("room", &room.room_name)
                .finish(),
            ConnectionState::Bound { id, room, .. } => f
                .debug_struct("Bound")
                .field("id", id)
                .field("room", &room.room_name)
                .finish(),
            ConnectionState::Closed { reason } => {
                f.debug_struct("Closed").field("reason", reason).finish()
            }
        }
    }
}

/// Append-only, arrival-ordered log of what was rendered for one binding.
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    entries: Vec<RenderDirective>,
}

impl ChatLog {
    pub fn push(&mut self, directive: RenderDirective) {
        self.entries.push(directive);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[RenderDirective] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ephemeral state of one client process.
///
/// Owned by the connection manager; other components only read it.
#[derive(Debug)]
pub struct Session {
    pub(crate) username: Username,
    pub(crate) state: ConnectionState,
    pub(crate) log: ChatLog,
}

impl Session {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            state: ConnectionState::Idle,
            log: ChatLog::default(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn phase(&self) -> ConnectionPhase {
        self.state.phase()
    }

    /// `Some` only while a connection attempt or binding is live.
    pub fn selected_room(&self) -> Option<&Room> {
        self.state.room()
    }

    /// The room messages are currently routed for (`Bound` only).
    pub fn bound_room(&self) -> Option<&Room> {
        match &self.state {
            ConnectionState::Bound { room, .. } => Some(room),
            _ => None,
        }
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }
}
