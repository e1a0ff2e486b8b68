//! Terminal implementation of the presentation layer.

use crate::domain::{Presenter, RenderDirective, Room};

use super::{formatter::MessageFormatter, prompt::redisplay_prompt};

/// Prints everything to stdout and redisplays the input prompt afterwards.
pub struct TerminalPresenter {
    formatter: MessageFormatter,
    prompt: String,
}

impl TerminalPresenter {
    pub fn new(formatter: MessageFormatter, prompt: String) -> Self {
        Self { formatter, prompt }
    }

    fn print(&self, text: &str) {
        print!("{}", text);
        redisplay_prompt(&self.prompt);
    }
}

impl Presenter for TerminalPresenter {
    fn show_chat(&self, room: &Room) {
        self.print(&MessageFormatter::format_chat_header(room));
    }

    fn hide_chat(&self) {
        self.print(&MessageFormatter::format_chat_closed());
    }

    fn render(&self, directive: &RenderDirective) {
        self.print(&self.formatter.format_directive(directive));
    }

    fn notice(&self, text: &str) {
        self.print(&MessageFormatter::format_notice(text));
    }

    fn show_rooms(&self, rooms: &[Room]) {
        self.print(&MessageFormatter::format_room_list(rooms));
    }
}
