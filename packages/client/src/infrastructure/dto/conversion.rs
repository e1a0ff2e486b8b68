//! Conversion logic between DTOs and domain types.

use crate::domain::{Room, RoomMessage};
use crate::infrastructure::dto::{http, websocket};

// ========================================
// DTO → Domain
// ========================================

impl From<http::RoomDto> for Room {
    fn from(dto: http::RoomDto) -> Self {
        Room::new(dto.room_id, dto.room_name, dto.owner_name)
    }
}

impl From<websocket::ChatMessage> for RoomMessage {
    fn from(dto: websocket::ChatMessage) -> Self {
        Self {
            room_id: dto.room_id,
            room_name: dto.room_name,
            owner_name: dto.owner_name,
            username: dto.username,
            content: dto.content,
            timestamp: dto.timestamp,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Room> for http::RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.room_id.clone(),
            room_name: room.room_name.clone(),
            owner_name: room.owner_name.clone(),
        }
    }
}

impl From<&RoomMessage> for websocket::ChatMessage {
    fn from(message: &RoomMessage) -> Self {
        Self {
            room_id: message.room_id.clone(),
            room_name: message.room_name.clone(),
            owner_name: message.owner_name.clone(),
            username: message.username.clone(),
            content: message.content.clone(),
            timestamp: message.timestamp.clone(),
        }
    }
}
