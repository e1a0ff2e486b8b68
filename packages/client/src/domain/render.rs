//! Render directives handed to the presentation layer.

/// Who authored a rendered message, relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    SelfAuthored,
    Peer,
}

/// Horizontal placement of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A single message ready for display.
///
/// Alignment and sender visibility follow from `author`: self-authored
/// messages are right-aligned without a sender name, peer messages are
/// left-aligned with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDirective {
    pub author: Author,
    pub alignment: Alignment,
    pub sender: Option<String>,
    pub content: String,
    pub timestamp: String,
}

impl RenderDirective {
    pub fn self_authored(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            author: Author::SelfAuthored,
            alignment: Alignment::Right,
            sender: None,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn peer(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            author: Author::Peer,
            alignment: Alignment::Left,
            sender: Some(sender.into()),
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}
