//! Infrastructure layer: wire DTOs and concrete collaborator adapters.

pub mod codec;
pub mod directory;
pub mod dto;
pub mod transport;
