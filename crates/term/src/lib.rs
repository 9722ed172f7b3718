//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! libraries and renders into a framebuffer that is diffed and flushed to the
//! terminal.
//!
//! - [`WellView`] implements the core `Renderer` contract onto a [`FrameBuffer`]
//! - [`TerminalRenderer`] owns terminal mode switching and flushing
//! - cells are drawn 2 columns wide to roughly square up terminal glyphs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{Viewport, WellView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
