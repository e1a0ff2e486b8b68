//! Client configuration resolved from the command line.

use std::sync::Arc;

use crate::{
    domain::{RoomDirectory, Username},
    infrastructure::directory::{FixedRoomDirectory, HttpRoomDirectory},
    ui::MessageFormatter,
};

/// Default messaging endpoint.
pub const DEFAULT_URL: &str = "ws://127.0.0.1:8080/ws";

/// Where the room list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    /// Built-in room list
    Fixed,
    /// Server-backed directory at the given base URL
    Http(String),
}

/// Everything the client needs to start.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub username: Username,
    pub url: String,
    pub directory: DirectorySource,
    pub width: usize,
}

impl ClientConfig {
    pub fn new(
        username: Option<&str>,
        url: impl Into<String>,
        directory_url: Option<String>,
        width: Option<usize>,
    ) -> Self {
        Self {
            username: Username::resolve(username),
            url: url.into(),
            directory: match directory_url {
                Some(base) if !base.trim().is_empty() => DirectorySource::Http(base),
                _ => DirectorySource::Fixed,
            },
            width: width.unwrap_or(MessageFormatter::DEFAULT_WIDTH),
        }
    }

    /// Instantiate the configured room directory.
    pub fn build_directory(&self) -> Arc<dyn RoomDirectory> {
        match &self.directory {
            DirectorySource::Fixed => Arc::new(FixedRoomDirectory::default()),
            DirectorySource::Http(base) => Arc::new(HttpRoomDirectory::new(base.clone())),
        }
    }
}
