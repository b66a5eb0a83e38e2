//! Core UI functionality for todobox.
//!
//! This module contains the building blocks the interface is made of.
//!
//! - [`actions`] - Intents produced by key handling and background timers
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`timer`] - Cancellable notification auto-dismiss
//!
//! Components turn key events into [`Action`]s, pass them down the hierarchy
//! through [`Component::update`], and the app component applies what is left
//! to the to-do list. Timers only talk back through the action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod timer;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use timer::NotificationTimer;
