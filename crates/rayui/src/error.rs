//! # UI Error Types
//!
//! Almost everything in the toolkit degrades silently (clamping, truncation,
//! ignored indices). The few conditions a caller can act on live here.

use thiserror::Error;

/// Errors surfaced by the toolkit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The tooltip registry has no free slot left.
    #[error("tooltip registry full: capacity {capacity}")]
    RegistryFull {
        /// Configured registry capacity.
        capacity: usize,
    },

    /// A tooltip handle does not refer to a live registry entry.
    #[error("unknown tooltip handle: slot {slot}, generation {generation}")]
    UnknownHandle {
        /// Slot index carried by the handle.
        slot: usize,
        /// Generation carried by the handle.
        generation: u32,
    },

    /// A configuration value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(String),
}

/// Result type for toolkit operations.
pub type UiResult<T> = Result<T, UiError>;

impl From<toml::de::Error> for UiError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
