//! Constants used throughout the application
//!
//! This module centralizes messages, UI text, and other constant values
//! to improve maintainability and consistency.

// Notification messages
pub const NOTIFY_TODO_ADDED: &str = "Todo added";
pub const NOTIFY_TODO_EDITED: &str = "Todo edited";
pub const NOTIFY_TODO_DELETED: &str = "Todo deleted";
pub const NOTIFY_TODO_EMPTY: &str = "Todo cannot be empty";

// UI text
pub const APP_TITLE: &str = "Todo App";
pub const INPUT_TITLE_ADD: &str = "Add a Todo";
pub const INPUT_TITLE_EDIT: &str = "Edit Todo";
pub const BUTTON_ADD: &str = "Add Todo";
pub const BUTTON_UPDATE: &str = "Update Todo";
pub const BUTTON_CANCEL_EDIT: &str = "Cancel Edit";
pub const LIST_TITLE: &str = "Todos";
pub const LIST_EMPTY: &str = "Nothing to do. Press 'a' to add a todo.";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// CLI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Notification timing
/// Default time a notification stays visible
pub const NOTIFICATION_DEFAULT_MS: u64 = 3000;
/// Shortest accepted notification duration
pub const NOTIFICATION_MIN_MS: u64 = 500;
/// Longest accepted notification duration
pub const NOTIFICATION_MAX_MS: u64 = 60_000;

// Event loop timing
pub const EVENT_POLL_MS: u64 = 100;
