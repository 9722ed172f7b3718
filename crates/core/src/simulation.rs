//! Simulation module - owns the well, the active piece and the score
//!
//! One `Simulation` is one game. It is advanced by `tick`, once per frame, with
//! the input events collected during that frame. Events are applied in order
//! before gravity is evaluated, so a move made on the same frame as a fall step
//! is seen by the fall.
//!
//! Rejected moves and rotations are silent no-ops. The only terminal condition
//! is a spawn that overlaps the grid, which switches the phase to
//! [`Phase::GameOver`]; after that nothing mutates the grid or piece again.

use log::{debug, info, trace};

use crate::collision::collides;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::types::{GameEvent, DEFAULT_FALL_TICKS, POINTS_PER_LINE, SOFT_DROP_FALL_TICKS};

/// Tunables for one simulation instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for piece selection
    pub seed: u64,
    /// Ticks per fall step
    pub fall_ticks: u32,
    /// Ticks per fall step while soft drop is held
    pub soft_drop_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            fall_ticks: DEFAULT_FALL_TICKS,
            soft_drop_ticks: SOFT_DROP_FALL_TICKS,
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Lifecycle phase. Spawning happens inside a tick and is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The piece moved down one row
    pub fell: bool,
    /// The piece was merged into the grid and a new one spawned
    pub locked: bool,
    /// Rows removed by the lock
    pub lines_cleared: u32,
    /// The game ended on this tick
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    piece: Piece,
    rng: PieceRng,
    config: SimConfig,
    phase: Phase,
    score: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    fall_counter: u32,
    soft_drop: bool,
}

impl Simulation {
    /// Start a game on an empty grid
    pub fn new(config: SimConfig) -> Self {
        Self::from_grid(Grid::new(), config)
    }

    /// Start a game on a pre-filled grid.
    ///
    /// The first piece spawns immediately; if it already collides the game
    /// starts in [`Phase::GameOver`].
    pub fn from_grid(grid: Grid, config: SimConfig) -> Self {
        let mut rng = PieceRng::new(config.seed);
        let piece = Piece::spawn(rng.next_kind());
        let mut sim = Self {
            grid,
            piece,
            rng,
            config,
            phase: Phase::Falling,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            fall_counter: 0,
            soft_drop: false,
        };
        sim.settle_spawn();
        sim
    }

    /// Replace the active piece, re-running the spawn check against the grid.
    ///
    /// Used to set up specific positions; normal play only spawns random pieces.
    pub fn with_piece(mut self, piece: Piece) -> Self {
        self.piece = piece;
        self.phase = Phase::Falling;
        self.settle_spawn();
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    /// Ticks required before the next automatic fall
    pub fn fall_interval(&self) -> u32 {
        if self.soft_drop {
            self.config.soft_drop_ticks
        } else {
            self.config.fall_ticks
        }
    }

    /// Ticks accumulated toward the next fall step
    pub fn fall_counter(&self) -> u32 {
        self.fall_counter
    }

    /// Apply one input event.
    ///
    /// Returns true if the event changed anything. Blocked moves and rotations,
    /// `Quit`, and every event after game over return false.
    pub fn apply_event(&mut self, event: GameEvent) -> bool {
        if self.is_game_over() {
            return false;
        }

        match event {
            GameEvent::MoveLeft => self.try_shift(-1),
            GameEvent::MoveRight => self.try_shift(1),
            GameEvent::RotateCw => self.try_rotate(),
            GameEvent::SoftDropStart => {
                let changed = !self.soft_drop;
                self.soft_drop = true;
                changed
            }
            GameEvent::SoftDropEnd => {
                let changed = self.soft_drop;
                self.soft_drop = false;
                changed
            }
            // Leaving the game is the caller's business.
            GameEvent::Quit => false,
        }
    }

    /// Advance one frame: count the tick, apply `events` in order, then run
    /// gravity if the fall interval has been reached.
    pub fn tick(&mut self, events: &[GameEvent]) -> TickReport {
        if self.is_game_over() {
            return TickReport::default();
        }

        self.fall_counter = self.fall_counter.saturating_add(1);

        for &event in events {
            self.apply_event(event);
        }

        if self.fall_counter < self.fall_interval() {
            return TickReport::default();
        }
        self.fall_counter = 0;
        self.gravity_step()
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if collides(&self.piece, &self.grid, dx, 0) {
            trace!("shift {} blocked at ({}, {})", dx, self.piece.x, self.piece.y);
            return false;
        }
        self.piece.x += dx;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let candidate = self.piece.rotated();
        if collides(&candidate, &self.grid, 0, 0) {
            trace!("rotation of {:?} blocked", self.piece.kind);
            return false;
        }
        self.piece = candidate;
        true
    }

    fn gravity_step(&mut self) -> TickReport {
        if !collides(&self.piece, &self.grid, 0, 1) {
            self.piece.y += 1;
            return TickReport {
                fell: true,
                ..TickReport::default()
            };
        }

        self.lock_piece()
    }

    /// Merge the piece, clear lines, score them and spawn the next piece
    fn lock_piece(&mut self) -> TickReport {
        self.grid.merge(&self.piece);
        let cleared = self.grid.clear_full_lines() as u32;

        self.pieces_locked = self.pieces_locked.saturating_add(1);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        self.score = self.score.saturating_add(cleared * POINTS_PER_LINE);

        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s), score {}",
            self.piece.kind, self.piece.x, self.piece.y, cleared, self.score
        );

        self.spawn();

        TickReport {
            fell: false,
            locked: true,
            lines_cleared: cleared,
            game_over: self.is_game_over(),
        }
    }

    fn spawn(&mut self) {
        self.piece = Piece::spawn(self.rng.next_kind());
        self.settle_spawn();
    }

    fn settle_spawn(&mut self) {
        if collides(&self.piece, &self.grid, 0, 0) {
            self.phase = Phase::GameOver;
            info!(
                "game over: {:?} cannot spawn; score {}, lines {}",
                self.piece.kind, self.score, self.lines_cleared
            );
        } else {
            debug!("spawned {:?} at x={}", self.piece.kind, self.piece.x);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
