//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! dependency on terminals, input devices or clocks:
//!
//! - **Deterministic**: the same seed and the same event stream produce the same game
//! - **Testable**: every rule is a plain method on plain data
//! - **Portable**: any backend implementing [`Renderer`] can display it
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 well with occupancy queries, merging and line clearing
//! - [`piece`]: tetromino shape matrices, pure clockwise rotation, the active piece
//! - [`collision`]: the single collision predicate used by every move
//! - [`rng`]: seeded uniform piece selection
//! - [`simulation`]: tick protocol, input handling, locking, scoring, game over
//! - [`render`]: the drawing contract backends implement
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row, chosen uniformly at random
//! - Gravity moves the piece one row every 50 ticks (5 while soft drop is held)
//! - A piece that cannot fall locks; full rows are removed and score 100 each
//! - Rotation is clockwise only, with no wall kicks
//! - A spawn that overlaps locked cells ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{SimConfig, Simulation};
//! use blockfall_types::GameEvent;
//!
//! let mut sim = Simulation::new(SimConfig::with_seed(12345));
//! let x = sim.piece().x;
//!
//! sim.tick(&[GameEvent::MoveLeft]);
//! assert_eq!(sim.piece().x, x - 1);
//! assert_eq!(sim.score(), 0);
//! ```

pub mod collision;
pub mod grid;
pub mod piece;
pub mod render;
pub mod rng;
pub mod simulation;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use grid::{Grid, Row};
pub use piece::{shape_for, Piece, Shape};
pub use render::{draw, Renderer, TextSlot};
pub use rng::PieceRng;
pub use simulation::{Phase, SimConfig, Simulation, TickReport};
