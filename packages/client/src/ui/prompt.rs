//! Prompt utilities for the terminal.

use std::io::Write;

/// Redisplay the prompt after printing output
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}

/// The prompt shown while waiting for input
pub fn prompt_for(username: &str) -> String {
    format!("{}> ", username)
}
