//! Data Transfer Objects (DTOs) for the chat client.
//!
//! DTOs are organized by protocol:
//! - `websocket`: the chat envelope exchanged on the messaging endpoint
//! - `http`: room directory request/response bodies

pub mod conversion;
pub mod http;
pub mod websocket;
