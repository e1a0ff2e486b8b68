//! UseCase layer: the core of the chat client.
//!
//! - `connection_manager`: owns the session and the single live connection
//! - `room_binding`: presence handshake sent once per connection
//! - `message_router`: filters and classifies inbound frames
//! - `outbound_framer`: validates and frames user input

pub mod connection_manager;
pub mod message_router;
pub mod outbound_framer;
pub mod room_binding;

pub use connection_manager::ConnectionManager;
pub use message_router::{MessageRouter, RouteOutcome};
pub use outbound_framer::{OutboundFramer, SendOutcome};
