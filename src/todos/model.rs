use crate::constants::{NOTIFY_TODO_ADDED, NOTIFY_TODO_DELETED, NOTIFY_TODO_EDITED, NOTIFY_TODO_EMPTY};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a single to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First eight hex digits, enough to tell items apart in logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create a pending item. Callers pass already validated, trimmed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Which item, if any, the next submit rewrites instead of appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(TodoId),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn target(&self) -> Option<TodoId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Added,
    Edited,
    Deleted,
    EmptyInput,
}

impl NotificationKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => NOTIFY_TODO_ADDED,
            Self::Edited => NOTIFY_TODO_EDITED,
            Self::Deleted => NOTIFY_TODO_DELETED,
            Self::EmptyInput => NOTIFY_TODO_EMPTY,
        }
    }

    /// Whether the message reports a rejected intent rather than a change
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

/// Transient status message produced by a state transition.
///
/// `seq` grows with every emitted notification so that a timer armed for an
/// older message cannot hide a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub kind: NotificationKind,
    pub visible: bool,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
