//! Headless replay of to-do intents.
//!
//! A script is a list of lines, one intent per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! edit 1
//! add Buy oat milk
//! toggle 1
//! remove 1
//! ```
//!
//! Positions are 1-based indexes into the list as it stands when the line is
//! applied. A position past the end resolves to an id that matches nothing,
//! so unknown-id behavior can be scripted too.

use crate::todos::{Todo, TodoId, TodoList};
use crate::ui::theme::ThemeMode;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{value}' is not a position (expected a number starting at 1)")]
    InvalidPosition { line: usize, value: String },

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// One user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit input text; `None` models a submission with no text at all
    Submit(Option<String>),
    BeginEdit(usize),
    CancelEdit,
    Toggle(usize),
    Remove(usize),
    RemoveAll,
    Dismiss,
    ToggleTheme,
}

impl Intent {
    /// Parse one script line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest)),
            None => (line, None),
        };

        let position = || parse_position(line_no, rest.unwrap_or(""));

        let intent = match command {
            "add" | "submit" => Self::Submit(rest.map(str::to_string)),
            "edit" => Self::BeginEdit(position()?),
            "cancel" => Self::CancelEdit,
            "toggle" => Self::Toggle(position()?),
            "remove" | "delete" => Self::Remove(position()?),
            "clear" => Self::RemoveAll,
            "dismiss" => Self::Dismiss,
            "theme" => Self::ToggleTheme,
            other => {
                return Err(ScriptError::UnknownCommand {
                    line: line_no,
                    command: other.to_string(),
                })
            }
        };
        Ok(Some(intent))
    }
}

fn parse_position(line: usize, value: &str) -> Result<usize, ScriptError> {
    let value = value.trim();
    match value.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(ScriptError::InvalidPosition {
            line,
            value: value.to_string(),
        }),
    }
}

/// Parse a whole script
pub fn parse_script(script: &str) -> Result<Vec<Intent>, ScriptError> {
    let mut intents = Vec::new();
    for (index, line) in script.lines().enumerate() {
        if let Some(intent) = Intent::parse_line(index + 1, line)? {
            intents.push(intent);
        }
    }
    Ok(intents)
}

/// A to-do list and display mode driven without a terminal
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub todos: TodoList,
    pub theme: ThemeMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, intent: &Intent) {
        match intent {
            Intent::Submit(text) => {
                self.todos.submit(text.as_deref());
            }
            Intent::BeginEdit(position) => {
                self.todos.begin_edit(self.resolve(*position));
            }
            Intent::CancelEdit => self.todos.cancel_edit(),
            Intent::Toggle(position) => {
                self.todos.toggle_complete(self.resolve(*position));
            }
            Intent::Remove(position) => {
                self.todos.remove(self.resolve(*position));
            }
            Intent::RemoveAll => self.todos.remove_all(),
            Intent::Dismiss => self.todos.dismiss_notification(),
            Intent::ToggleTheme => self.theme = self.theme.toggled(),
        }
    }

    /// Id at 1-based `position`, or a fresh id when out of range
    fn resolve(&self, position: usize) -> TodoId {
        position
            .checked_sub(1)
            .and_then(|index| self.todos.todos().get(index))
            .map_or_else(TodoId::new, |todo| todo.id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.todos().to_vec(),
            editing: self.todos.edit_session().target(),
            notification: self.todos.notification().map(|n| NotificationSnapshot {
                message: n.message().to_string(),
                visible: n.visible,
            }),
            theme: self.theme,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationSnapshot {
    pub message: String,
    pub visible: bool,
}

/// Observable state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub editing: Option<TodoId>,
    pub notification: Option<NotificationSnapshot>,
    pub theme: ThemeMode,
}

/// Apply every intent in `script` to a fresh session
pub fn replay(script: &str) -> Result<Snapshot, ScriptError> {
    let mut session = Session::new();
    for intent in parse_script(script)? {
        log::debug!("Replaying {:?}", intent);
        session.apply(&intent);
    }
    Ok(session.snapshot())
}

pub fn replay_file<P: AsRef<Path>>(path: P) -> Result<Snapshot, ScriptError> {
    let script = std::fs::read_to_string(path)?;
    replay(&script)
}
