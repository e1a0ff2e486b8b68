//! Room-based WebSocket chat client.
//!
//! A user picks (or creates) a named room; the client keeps exactly one
//! connection to the messaging endpoint, announces presence in the room,
//! renders the room's messages in arrival order and frames what the user
//! types.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod error;

#[cfg(test)]
mod testing;

pub use ui::run_client;
