//! Message formatting utilities for client display.

use crate::domain::{Alignment, RenderDirective, Room};

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter {
    /// Column self-authored messages are right-aligned to
    width: usize,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

impl MessageFormatter {
    pub const DEFAULT_WIDTH: usize = 60;

    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Format one rendered message
    ///
    /// Peer messages are left-aligned with the sender name; self-authored
    /// messages are right-aligned to the configured width without it.
    pub fn format_directive(&self, directive: &RenderDirective) -> String {
        match directive.alignment {
            Alignment::Left => format!(
                "\n@{}: {}  ({})\n",
                directive.sender.as_deref().unwrap_or("?"),
                directive.content,
                directive.timestamp
            ),
            Alignment::Right => {
                let body = format!("{}  ({})", directive.content, directive.timestamp);
                format!("\n{:>width$}\n", body, width = self.width)
            }
        }
    }

    /// Format the header shown when the chat view opens
    pub fn format_chat_header(room: &Room) -> String {
        format!(
            "\n\n{}\nRoom: {}, owner: {}\n{}\n",
            RULE, room.room_name, room.owner_name, RULE
        )
    }

    /// Format the marker shown when the chat view closes
    pub fn format_chat_closed() -> String {
        format!("\n{}\n(chat closed)\n", RULE)
    }

    /// Format a one-line notice
    pub fn format_notice(text: &str) -> String {
        format!("\n! {}\n", text)
    }

    /// Format the room list with 1-based indices usable with `/join`
    pub fn format_room_list(rooms: &[Room]) -> String {
        let mut output = String::new();
        output.push_str("\nRooms:\n");

        if rooms.is_empty() {
            output.push_str("(No rooms)\n");
        } else {
            for (index, room) in rooms.iter().enumerate() {
                output.push_str(&format!(
                    "{:>3}. {} (owner: {}, id: {})\n",
                    index + 1,
                    room.room_name,
                    room.owner_name,
                    room.room_id
                ));
            }
        }

        output
    }

    /// Format the command reference
    pub fn format_help() -> String {
        [
            "Commands:",
            "  /rooms              list rooms",
            "  /join <room>        join by name, id or list number",
            "  /create <id> <name> create a room owned by you",
            "  /leave              leave the current room",
            "  /help               show this help",
            "  /quit               exit",
            "Anything else is sent to the current room.",
        ]
        .join("\n")
    }
}
