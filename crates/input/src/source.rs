//! Input sources: where a frame's events come from.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};
use log::warn;

use crate::handler::InputHandler;
use crate::types::GameEvent;

/// Events collected for one tick. Anything beyond capacity is dropped.
pub type EventBatch = ArrayVec<GameEvent, 32>;

/// A producer of discrete game events
pub trait InputSource {
    /// Wait up to `timeout` for input, then drain everything pending into `out`.
    fn poll_events(&mut self, timeout: Duration, out: &mut EventBatch) -> io::Result<()>;
}

/// Crossterm-backed keyboard input
#[derive(Debug)]
pub struct TerminalInput {
    handler: InputHandler,
    last_poll: Instant,
}

impl TerminalInput {
    /// `reports_release` should be true when keyboard enhancement was enabled
    /// on the terminal, so real key-up events will arrive.
    pub fn new(reports_release: bool) -> Self {
        Self {
            handler: InputHandler::new().with_release_events(reports_release),
            last_poll: Instant::now(),
        }
    }

    pub fn handler(&self) -> &InputHandler {
        &self.handler
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self, timeout: Duration, out: &mut EventBatch) -> io::Result<()> {
        let mut wait = timeout;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if let Some(ev) = self.handler.handle_key(key) {
                    push(out, ev);
                }
            }
        }

        let elapsed_ms = self.last_poll.elapsed().as_millis().min(u32::MAX as u128) as u32;
        self.last_poll = Instant::now();
        if let Some(ev) = self.handler.update(elapsed_ms) {
            push(out, ev);
        }
        Ok(())
    }
}

/// Replays a fixed script, one batch per poll. Used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<Vec<GameEvent>>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<GameEvent>>) -> Self {
        Self { frames, next: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, _timeout: Duration, out: &mut EventBatch) -> io::Result<()> {
        if let Some(frame) = self.frames.get(self.next) {
            for &ev in frame {
                push(out, ev);
            }
            self.next += 1;
        }
        Ok(())
    }
}

fn push(out: &mut EventBatch, ev: GameEvent) {
    if out.try_push(ev).is_err() {
        warn!("input batch full, dropping {}", ev.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_frames_in_order() {
        let mut input = ScriptedInput::new(vec![
            vec![GameEvent::MoveLeft, GameEvent::RotateCw],
            vec![],
            vec![GameEvent::Quit],
        ]);
        let mut batch = EventBatch::new();

        input.poll_events(Duration::ZERO, &mut batch).unwrap();
        assert_eq!(batch.as_slice(), &[GameEvent::MoveLeft, GameEvent::RotateCw]);
        batch.clear();

        input.poll_events(Duration::ZERO, &mut batch).unwrap();
        assert!(batch.is_empty());

        input.poll_events(Duration::ZERO, &mut batch).unwrap();
        assert_eq!(batch.as_slice(), &[GameEvent::Quit]);
        assert!(input.is_exhausted());
    }

    #[test]
    fn overflow_is_dropped_not_panicking() {
        let mut batch = EventBatch::new();
        for _ in 0..40 {
            push(&mut batch, GameEvent::MoveRight);
        }
        assert_eq!(batch.len(), batch.capacity());
    }
}
