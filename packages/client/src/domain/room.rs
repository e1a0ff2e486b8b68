//! Room and user identity.

use std::fmt;

/// Username used when none was supplied at start-up.
pub const ANONYMOUS: &str = "anonymous";

/// A chat room as supplied by the room directory.
///
/// Rooms are immutable once created. `room_name` is the key inbound frames
/// are matched against; `room_id` is carried on the wire but is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: String,
    pub room_name: String,
    pub owner_name: String,
}

impl Room {
    pub fn new(
        room_id: impl Into<String>,
        room_name: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            room_name: room_name.into(),
            owner_name: owner_name.into(),
        }
    }

    /// Whether `name` refers to this room.
    pub fn is_named(&self, name: &str) -> bool {
        self.room_name == name
    }
}

/// The local user's display name, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Resolve the username from optional user input.
    ///
    /// Missing or blank input falls back to [`ANONYMOUS`].
    pub fn resolve(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(ANONYMOUS.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
