//! File logging setup.
//!
//! The game owns the terminal in raw mode, so log output goes to a file through
//! log4rs, or nowhere when no path is configured.

use anyhow::{Context, Result};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

use crate::config::Config;

/// Install the global logger if a log path is configured.
///
/// The returned handle keeps the logger alive; dropping it is harmless.
pub fn init(config: &Config) -> Result<Option<Handle>> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(None);
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let log_config = log4rs::Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(config.log_level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(config.log_level))?;

    let handle = log4rs::init_config(log_config)?;
    Ok(Some(handle))
}
