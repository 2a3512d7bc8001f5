//!
//! Logging initialization for hosts embedding the adapter helpers.
//!
//! The library itself only emits `tracing` events; this module installs the
//! same `fmt` subscriber the gateway binary uses, driven by [`Config`].
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- uses ------------------------------------------------------------------------------------ */

use crate::config::Config;

/* --- start of code -------------------------------------------------------------------------- */

///
/// Initialize logging with the configured log level.
///
/// Sets up a tracing subscriber with the maximum level taken from the
/// configuration. A subscriber that is already installed is left in place.
///
/// # Arguments
///  * `config` - configuration containing log level settings
///
/// # Returns
///  * `true` if this call installed the subscriber
///  * `false` if a global subscriber was already set
pub fn init(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level.as_tracing_level())
        .with_target(false)
        .try_init()
        .is_ok()
}
