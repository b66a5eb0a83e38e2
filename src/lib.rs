//! todobox - A terminal to-do list
//!
//! This library provides an in-memory to-do list with an interactive terminal
//! interface built with Ratatui, plus a headless replay harness that drives the
//! same state manager from a script.
//!
//! # Modules
//!
//! * [`todos`] - The to-do list state manager and input validation
//! * [`ui`] - Terminal user interface components
//! * [`harness`] - Script replay and JSON snapshots
//! * [`config`] - Application configuration management

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Headless replay of user intents
pub mod harness;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// To-do list state, transitions and validation
pub mod todos;

/// Terminal user interface components and rendering
pub mod ui;
