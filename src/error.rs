//!
//! Error handling for the AgentCore adapter helpers.
//!
//! Defines the error types surfaced by the library using thiserror. Session key
//! derivation cannot fail; response formatting can only fail on serialization,
//! and configuration loading on malformed input.
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- uses ------------------------------------------------------------------------------------ */

use thiserror::Error;

/* --- types ----------------------------------------------------------------------------------- */

///
/// Adapter error types.
///
/// Uses thiserror for automatic Display and Error trait implementations.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/* --- start of code -------------------------------------------------------------------------- */

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, AdapterError>;
