//! Presentation layer contract.

use super::{RenderDirective, Room};

/// Receiver of everything the core wants shown to the user.
///
/// Implementations only display; they never call back into the core.
pub trait Presenter: Send + Sync {
    /// Show the chat view for a freshly bound room with an empty log.
    fn show_chat(&self, room: &Room);

    /// Hide the chat view after the connection closed.
    fn hide_chat(&self);

    /// Append one message to the chat view.
    fn render(&self, directive: &RenderDirective);

    /// Show a one-line notice (room switch, directory failure, ...).
    fn notice(&self, text: &str);

    /// Show the rooms currently offered by the directory.
    fn show_rooms(&self, rooms: &[Room]);
}
