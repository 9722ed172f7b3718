//! Prints the game events produced by the keyboard, one per line.
//!
//! Useful for checking whether a terminal reports key releases (soft drop end)
//! or relies on the release timeout. Press `q` to exit.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};

use blockfall::input::{EventBatch, InputSource, TerminalInput};
use blockfall::types::GameEvent;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let release = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if release {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = probe(release);

    if release {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn probe(release: bool) -> Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "key release events: {}. press keys, q to quit\r\n",
        if release { "yes" } else { "no (timeout)" }
    )?;
    out.flush()?;

    let mut input = TerminalInput::new(release);
    let mut batch = EventBatch::new();
    loop {
        batch.clear();
        input.poll_events(Duration::from_millis(16), &mut batch)?;
        for ev in &batch {
            write!(out, "{}\r\n", ev.as_str())?;
        }
        out.flush()?;
        if batch.contains(&GameEvent::Quit) {
            return Ok(());
        }
    }
}
