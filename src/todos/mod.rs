//! In-memory to-do list state.
//!
//! [`TodoList`] owns the ordered collection of [`Todo`] items, the single
//! [`EditSession`] and the last emitted [`Notification`]. Every transition is
//! synchronous and total: invalid input degrades to a notification, unknown ids
//! degrade to a no-op.

pub mod manager;
pub mod model;
pub mod validation;

pub use manager::TodoList;
pub use model::{EditSession, Notification, NotificationKind, Todo, TodoId};
pub use validation::is_valid;
