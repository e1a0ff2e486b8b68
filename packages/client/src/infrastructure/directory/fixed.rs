//! Built-in room list.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{Room, RoomDirectory},
    error::DirectoryError,
};

/// Room directory backed by an in-memory list.
///
/// Starts from [`FixedRoomDirectory::builtin_rooms`] unless constructed with
/// an explicit list. Created rooms live only as long as the process.
pub struct FixedRoomDirectory {
    rooms: Mutex<Vec<Room>>,
}

impl FixedRoomDirectory {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
        }
    }

    /// The five rooms every client ships with.
    pub fn builtin_rooms() -> Vec<Room> {
        vec![
            Room::new("1", "GO", "gopher"),
            Room::new("2", "Python", "pythonista"),
            Room::new("3", "Rust", "ferris"),
            Room::new("4", "JAVA", "duke"),
            Room::new("5", "KOTLIN", "kodee"),
        ]
    }
}

impl Default for FixedRoomDirectory {
    fn default() -> Self {
        Self::new(Self::builtin_rooms())
    }
}

#[async_trait]
impl RoomDirectory for FixedRoomDirectory {
    async fn list_rooms(&self) -> Result<Vec<Room>, DirectoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.clone())
    }

    async fn create_room(&self, room: &Room) -> Result<(), DirectoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.iter().any(|r| r.room_id == room.room_id) {
            return Err(DirectoryError::Rejected(format!(
                "room id '{}' already exists",
                room.room_id
            )));
        }
        rooms.push(room.clone());
        tracing::info!("Created room '{}' ({})", room.room_name, room.room_id);
        Ok(())
    }
}
