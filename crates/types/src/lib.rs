//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable from the simulation, the terminal view and the input layer alike.
//!
//! # Well Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing
//!
//! Gravity is counted in ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed tick length (~60 Hz) |
//! | `DEFAULT_FALL_TICKS` | 50 | Ticks per automatic fall step |
//! | `SOFT_DROP_FALL_TICKS` | 5 | Ticks per fall step while soft drop is held |
//! | `SOFT_DROP_RELEASE_TIMEOUT_MS` | 150 | Synthetic release for terminals without key-up events |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameEvent, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameEvent::from_str("rotateCw"), Some(GameEvent::RotateCw));
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Well width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Well height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Fixed tick interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u64 = 16;

/// Ticks between automatic fall steps.
pub const DEFAULT_FALL_TICKS: u32 = 50;

/// Ticks between fall steps while soft drop is held.
pub const SOFT_DROP_FALL_TICKS: u32 = 5;

/// Flat bonus per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// Soft drop is released after this long without another press, on terminals
/// that never report key releases.
pub const SOFT_DROP_RELEASE_TIMEOUT_MS: u32 = 150;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// A cell in the well
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Locked cell, colored by the piece that filled it
pub type Cell = Option<Rgb>;

/// The seven tetromino kinds
///
/// Each kind has one fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta
/// - **L**: Orange
/// - **J**: Blue
/// - **S**: Green
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color shared by every cell of this kind.
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::I => CYAN,
            PieceKind::O => YELLOW,
            PieceKind::T => MAGENTA,
            PieceKind::L => ORANGE,
            PieceKind::J => BLUE,
            PieceKind::S => GREEN,
            PieceKind::Z => RED,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Logical input events delivered by an input source.
///
/// Each event corresponds to one press or release edge. Soft drop is a held
/// modifier, so it has a start and an end event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Shift the piece one cell left
    MoveLeft,
    /// Shift the piece one cell right
    MoveRight,
    /// Rotate the piece 90° clockwise
    RotateCw,
    /// Soft drop key went down
    SoftDropStart,
    /// Soft drop key went up
    SoftDropEnd,
    /// Leave the game
    Quit,
}

impl GameEvent {
    /// Parse event from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameEvent::MoveLeft),
            "moveright" => Some(GameEvent::MoveRight),
            "rotatecw" => Some(GameEvent::RotateCw),
            "softdropstart" => Some(GameEvent::SoftDropStart),
            "softdropend" => Some(GameEvent::SoftDropEnd),
            "quit" => Some(GameEvent::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::RotateCw => "rotateCw",
            GameEvent::SoftDropStart => "softDropStart",
            GameEvent::SoftDropEnd => "softDropEnd",
            GameEvent::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DEFAULT_FALL_TICKS, 50);
        assert_eq!(SOFT_DROP_FALL_TICKS, 5);
        assert!(SOFT_DROP_FALL_TICKS < DEFAULT_FALL_TICKS);
        assert_eq!(POINTS_PER_LINE, 100);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }

    #[test]
    fn event_names_parse_back() {
        for ev in [
            GameEvent::MoveLeft,
            GameEvent::MoveRight,
            GameEvent::RotateCw,
            GameEvent::SoftDropStart,
            GameEvent::SoftDropEnd,
            GameEvent::Quit,
        ] {
            assert_eq!(GameEvent::from_str(ev.as_str()), Some(ev));
        }
        assert_eq!(GameEvent::from_str("hardDrop"), None);
    }

    #[test]
    fn piece_kind_parse_is_case_insensitive() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(
                PieceKind::from_str(&kind.as_str().to_uppercase()),
                Some(kind)
            );
        }
    }
}
