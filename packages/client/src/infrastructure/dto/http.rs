//! HTTP DTOs for the room directory.

use serde::{Deserialize, Serialize};

/// A room as listed by `GET /rooms` and created by `POST /create-room`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_id: String,
    pub room_name: String,
    pub owner_name: String,
}
