pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    /// Text mode prints `lines`; JSON mode prints `json_value` instead.
    pub fn emit<T: Serialize>(&self, lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_lines(lines),
            OutputMode::Json => json::print(json_value),
        }
    }
}
