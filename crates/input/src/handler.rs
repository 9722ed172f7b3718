//! Edge tracking for held keys.
//!
//! The simulation wants exactly one `SoftDropStart` per press and one
//! `SoftDropEnd` per release. Terminals repeat presses while a key is held and
//! many never report releases at all, so this handler deduplicates presses and,
//! until the terminal proves it reports releases, ends a soft drop once no
//! press has arrived for the release timeout.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{is_soft_drop, map_key_event};
use crate::types::{GameEvent, SOFT_DROP_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    since_soft_drop_press_ms: u32,
    release_timeout_ms: u32,
    reports_release: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            since_soft_drop_press_ms: 0,
            release_timeout_ms: SOFT_DROP_RELEASE_TIMEOUT_MS,
            reports_release: false,
        }
    }

    /// Declare up front that the terminal sends key-release events
    /// (keyboard enhancement enabled), which turns the timeout off.
    pub fn with_release_events(mut self, reports_release: bool) -> Self {
        self.reports_release = reports_release;
        self
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Translate one key event, dropping duplicate soft-drop edges.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameEvent> {
        if key.kind == KeyEventKind::Release {
            self.reports_release = true;
        }
        if key.kind != KeyEventKind::Release && is_soft_drop(key.code) {
            self.since_soft_drop_press_ms = 0;
        }

        match map_key_event(key)? {
            GameEvent::SoftDropStart => {
                if self.soft_drop_held {
                    None
                } else {
                    self.soft_drop_held = true;
                    Some(GameEvent::SoftDropStart)
                }
            }
            GameEvent::SoftDropEnd => {
                if self.soft_drop_held {
                    self.soft_drop_held = false;
                    Some(GameEvent::SoftDropEnd)
                } else {
                    None
                }
            }
            other => Some(other),
        }
    }

    /// Advance the release timer. Returns a synthesized `SoftDropEnd` when a
    /// held soft drop times out on a terminal without release events.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameEvent> {
        if !self.soft_drop_held || self.reports_release {
            return None;
        }

        self.since_soft_drop_press_ms = self.since_soft_drop_press_ms.saturating_add(elapsed_ms);
        if self.since_soft_drop_press_ms > self.release_timeout_ms {
            self.soft_drop_held = false;
            self.since_soft_drop_press_ms = 0;
            return Some(GameEvent::SoftDropEnd);
        }
        None
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
