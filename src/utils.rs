use crate::config::PromptColor;
use crossterm::style::{ResetColor, SetForegroundColor};

/// Utility functions for the shell
pub struct Utils;

impl Utils {
    /// Split a command line into whitespace-delimited tokens.
    ///
    /// Pure: no quoting, no escaping, consecutive whitespace collapses, and
    /// blank input yields an empty vector. Tokens borrow from `line`.
    pub fn split_args(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    /// Get the current working directory as a string
    pub fn current_dir_display() -> String {
        std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "?".to_string())
    }

    pub fn home_dir() -> Option<String> {
        std::env::var("HOME").ok()
    }

    /// Format the prompt from the resolved color and the current working
    /// directory. The directory is queried fresh on every call since `cd`
    /// can change it between prompts.
    pub fn format_prompt(color: PromptColor) -> String {
        let cwd = Self::current_dir_display();
        match color.foreground() {
            Some(fg) => format!("{}{}{} $ ", SetForegroundColor(fg), cwd, ResetColor),
            None => format!("{} $ ", cwd),
        }
    }
}
