//! Room directory adapters.
//!
//! - `http`: server-backed directory (`GET /rooms`, `POST /create-room`)
//! - `fixed`: built-in room list held in memory

pub mod fixed;
pub mod http;

pub use fixed::FixedRoomDirectory;
pub use http::HttpRoomDirectory;
