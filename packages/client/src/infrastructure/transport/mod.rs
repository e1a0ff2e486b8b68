//! Concrete transports to the messaging endpoint.

pub mod websocket;

pub use websocket::{WebSocketConnection, WebSocketTransport};
