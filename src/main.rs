//! Terminal Blockfall runner (default binary).
//!
//! Owns the one `Simulation`, drains keyboard input once per tick, and redraws
//! through a framebuffer-based terminal renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;

use blockfall::core::Simulation;
use blockfall::input::{EventBatch, InputSource, TerminalInput};
use blockfall::logging;
use blockfall::term::{FrameBuffer, TerminalRenderer, Viewport, WellView};
use blockfall::types::GameEvent;
use blockfall::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log = logging::init(&config)?;
    info!(
        "starting: seed {}, fall {} ticks, soft drop {} ticks, tick {:?}",
        config.sim.seed, config.sim.fall_ticks, config.sim.soft_drop_ticks, config.tick
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut sim = Simulation::new(config.sim);
    let view = WellView::default();
    let mut input = TerminalInput::new(term.reports_key_release());
    info!("key release events: {}", term.reports_key_release());

    let mut fb = FrameBuffer::new(0, 0);
    let mut pending = EventBatch::new();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = config
            .tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        input.poll_events(timeout, &mut pending)?;

        if pending.contains(&GameEvent::Quit) {
            info!(
                "quit: score {}, lines {}, pieces {}",
                sim.score(),
                sim.lines_cleared(),
                sim.pieces_locked()
            );
            return Ok(());
        }

        // Tick.
        if last_tick.elapsed() >= config.tick {
            last_tick = Instant::now();
            let report = sim.tick(&pending);
            pending.clear();

            if report.game_over {
                info!("final score {}", sim.score());
            }
        }
    }
}
