use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;
use std::env;

const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

pub fn init() -> Result<()> {
    init_with_level(level(env::var(RUNNER_DEBUG).ok().as_deref()))?;

    Ok(())
}

/// The runner sets `RUNNER_DEBUG=1` when step debug logging is enabled
fn level(runner_debug: Option<&str>) -> Level {
    match runner_debug {
        Some("1") => Level::Debug,
        _ => Level::Info,
    }
}
