//! Terminal presentation layer and the client run loop.

mod command;
mod formatter;
mod presenter;
mod prompt;
mod runner;

pub use command::{Command, CommandError};
pub use formatter::MessageFormatter;
pub use presenter::TerminalPresenter;
pub use runner::{ChatApp, Flow, run_client};
