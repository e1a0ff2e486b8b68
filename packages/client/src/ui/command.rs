//! Parsing of input lines into client commands.

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch and list the rooms offered by the directory
    Rooms,
    /// Join a room by name, id or list number
    Join(String),
    /// Create a room owned by the local user
    Create { room_id: String, room_name: String },
    /// Leave the current room
    Leave,
    Help,
    Quit,
    /// Content for the current room, passed through untouched
    Say(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '/{0}'. Type /help for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse a raw input line.
    ///
    /// Lines not starting with `/` are chat content. A leading `//` sends a
    /// literal `/`.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let trimmed = line.trim_start();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Command::Say(line.to_string()));
        };
        if rest.starts_with('/') {
            return Ok(Command::Say(rest.to_string()));
        }

        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let args = parts.next().map(str::trim).unwrap_or_default();

        match name {
            "rooms" | "list" => Ok(Command::Rooms),
            "join" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("/join <room>"));
                }
                Ok(Command::Join(args.to_string()))
            }
            "create" => {
                let mut create_args = args.splitn(2, char::is_whitespace);
                let room_id = create_args.next().unwrap_or_default().trim();
                let room_name = create_args.next().unwrap_or_default().trim();
                if room_id.is_empty() || room_name.is_empty() {
                    return Err(CommandError::Usage("/create <id> <name>"));
                }
                Ok(Command::Create {
                    room_id: room_id.to_string(),
                    room_name: room_name.to_string(),
                })
            }
            "leave" => Ok(Command::Leave),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
