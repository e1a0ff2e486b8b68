//! Room directory contract.

use async_trait::async_trait;

use crate::error::DirectoryError;

use super::Room;

/// Source of the rooms a user can join.
///
/// Either a fixed list compiled into the client or a server-backed
/// directory; which one is used is a deployment choice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Fetch every available room. Ordering is not significant.
    async fn list_rooms(&self) -> Result<Vec<Room>, DirectoryError>;

    /// Register a new room.
    async fn create_room(&self, room: &Room) -> Result<(), DirectoryError>;
}
