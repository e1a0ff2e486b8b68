//! Utilities shared by the Heya client binary and its tests.

pub mod logger;
pub mod time;
