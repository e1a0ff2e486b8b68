//! Server-backed room directory over HTTP.

use async_trait::async_trait;

use crate::{
    domain::{Room, RoomDirectory},
    error::DirectoryError,
    infrastructure::dto::http::RoomDto,
};

/// Room directory reached through `GET /rooms` and `POST /create-room`.
#[derive(Debug, Clone)]
pub struct HttpRoomDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoomDirectory {
    /// Create a directory client rooted at `base_url` (e.g., "http://127.0.0.1:8080").
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl RoomDirectory for HttpRoomDirectory {
    async fn list_rooms(&self) -> Result<Vec<Room>, DirectoryError> {
        let url = self.endpoint("rooms");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(DirectoryError::Unavailable(format!(
                "GET /rooms returned {}",
                status
            )));
        }

        let rooms: Vec<RoomDto> = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Fetched {} rooms from {}", rooms.len(), url);
        Ok(rooms.into_iter().map(Room::from).collect())
    }

    async fn create_room(&self, room: &Room) -> Result<(), DirectoryError> {
        let url = self.endpoint("create-room");
        let response = self
            .client
            .post(&url)
            .json(&RoomDto::from(room))
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("POST {} returned {}", url, status);
            return Err(DirectoryError::Unavailable(format!(
                "POST /create-room returned {}",
                status
            )));
        }

        tracing::info!("Created room '{}' ({})", room.room_name, room.room_id);
        Ok(())
    }
}
