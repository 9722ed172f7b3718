//! Terminal input module (simulation-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameEvent`] edges and provides the
//! [`InputSource`] abstraction the game loop drains once per tick, including
//! on terminals without key-release events.

pub mod handler;
pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{map_key_event, should_quit};
pub use source::{EventBatch, InputSource, ScriptedInput, TerminalInput};
