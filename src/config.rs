//! Runtime configuration read from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece RNG seed (random when unset)
//! - `BLOCKFALL_FALL_TICKS`: ticks per fall step
//! - `BLOCKFALL_SOFT_DROP_TICKS`: ticks per fall step while soft dropping
//! - `BLOCKFALL_TICK_MS`: tick length in milliseconds
//! - `BLOCKFALL_LOG_PATH`: log file (logging is off when unset or empty)
//! - `BLOCKFALL_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace`
//!
//! Unparseable or zero values fall back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::core::SimConfig;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sim: SimConfig,
    pub tick: Duration,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick: Duration::from_millis(TICK_MS),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u64>);
        let fall_ticks = positive(lookup("BLOCKFALL_FALL_TICKS"))
            .unwrap_or(defaults.sim.fall_ticks);
        let soft_drop_ticks = positive(lookup("BLOCKFALL_SOFT_DROP_TICKS"))
            .unwrap_or(defaults.sim.soft_drop_ticks);
        let tick = positive(lookup("BLOCKFALL_TICK_MS"))
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(defaults.tick);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            sim: SimConfig {
                seed,
                fall_ticks,
                soft_drop_ticks,
            },
            tick,
            log_path,
            log_level,
        }
    }
}

fn positive(value: Option<String>) -> Option<u32> {
    value
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
}
