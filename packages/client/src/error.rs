//! Error types for the Heya chat client.
//!
//! Every error here is recoverable: the core degrades to a no-op or to the
//! unbound state, never to a crash.

use thiserror::Error;

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be opened
    #[error("failed to connect to {url}: {reason}")]
    ConnectFailed { url: String, reason: String },

    /// A frame could not be written to an open connection
    #[error("failed to send frame: {0}")]
    SendFailed(String),

    /// An outbound message could not be serialized
    #[error(transparent)]
    Encode(#[from] FrameError),
}

/// Room directory failures. Always surfaced to the user as a notice.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Network failure or non-2xx response
    #[error("room directory unavailable: {0}")]
    Unavailable(String),

    /// The directory answered with a body that is not a room list
    #[error("room directory returned an invalid response: {0}")]
    InvalidResponse(String),

    /// The directory refused to create the room
    #[error("room directory rejected the request: {0}")]
    Rejected(String),
}

/// Wire format failures.
///
/// Inbound ones are logged and discarded; the connection stays up.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Not a chat envelope, or a required field is missing
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// An outbound message could not be serialized
    #[error("failed to encode frame: {0}")]
    Encode(String),
}

/// Top-level errors of the client binary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Terminal input could not be initialised
    #[error("input error: {0}")]
    Input(String),
}
