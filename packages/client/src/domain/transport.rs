//! Transport contract and the events it emits.
//!
//! The transport is a single text-framed channel to the messaging endpoint.
//! Instead of callbacks it pushes a small closed set of events onto a
//! channel consumed by exactly one handler (the connection manager), so all
//! state changes happen on one logical flow of control.

use std::fmt;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::TransportError;

/// Generation number of a connection attempt.
///
/// Every `bind_room` call allocates a new id. Events carrying an id other
/// than the current connection's are stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a connection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// Closed by this client (leave or room switch).
    Local,
    /// Closed by the peer (close frame or end of stream).
    Peer,
    /// The transport failed.
    Error(String),
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::Local => f.write_str("closed locally"),
            CloseReason::Peer => f.write_str("closed by server"),
            CloseReason::Error(e) => write!(f, "transport error: {}", e),
        }
    }
}

/// Events emitted by an open transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Always the first event of a connection.
    Opened,
    /// A text frame arrived, not yet parsed.
    FrameReceived(String),
    /// The connection is gone. Emitted at most once and always last.
    Closed(CloseReason),
}

/// A transport event tagged with the connection that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEvent {
    pub connection: ConnectionId,
    pub event: TransportEvent,
}

impl ConnectionEvent {
    pub fn new(connection: ConnectionId, event: TransportEvent) -> Self {
        Self { connection, event }
    }
}

/// Sender half of the event channel handed to [`Transport::open`].
pub type EventSender = mpsc::UnboundedSender<ConnectionEvent>;

/// Factory for connections to the fixed messaging endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open a new connection.
    ///
    /// Resolves once the transport is open. The implementation must then
    /// deliver [`TransportEvent::Opened`] for `id` before any other event.
    async fn open(
        &self,
        id: ConnectionId,
        events: EventSender,
    ) -> Result<Box<dyn Connection>, TransportError>;
}

/// Write half of an open connection.
#[async_trait]
pub trait Connection: Send {
    /// Transmit one text frame.
    async fn send(&mut self, frame: String) -> Result<(), TransportError>;

    /// Close gracefully. Inbound frames still in flight are discarded and
    /// no further events are delivered for this connection.
    async fn close(&mut self);
}
