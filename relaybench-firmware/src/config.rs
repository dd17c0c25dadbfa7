//! Board configuration loading
//!
//! board.toml is compiled into the image and already checked by build.rs.
//! It is re-validated here; a file that fails at boot falls back to the
//! ES32D26 defaults so the bench still runs.

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use relaybench_core::config::BoardConfig;

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse and validate a board configuration
pub fn parse(text: &str) -> Result<BoardConfig> {
    let config: BoardConfig = toml::from_str(text).context("board.toml does not parse")?;
    config
        .validate()
        .map_err(|e| anyhow!("board.toml rejected: {}", e))?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load() -> BoardConfig {
    let config = match parse(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; using ES32D26 defaults", e);
            BoardConfig::default()
        }
    };
    log_summary(&config);
    config
}

fn log_summary(config: &BoardConfig) {
    let r = &config.relays;
    let i = &config.inputs;
    let t = &config.timing;
    debug!(
        "595: DATA={} CLOCK={} LATCH={} OE={} ({:?})",
        r.data, r.clock, r.latch, r.output_enable, r.oe_polarity
    );
    debug!("165: DATA={} CLOCK={} LOAD={}", i.data, i.clock, i.load);
    debug!(
        "timing: tick={}ms latch_hold={}us load_pulse={}us half_period={}us setup={}ns",
        t.tick_period_ms, t.latch_hold_us, t.load_pulse_us, t.clock_half_period_us, t.setup_ns
    );
}
