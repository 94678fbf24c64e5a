//! Tuning constants for the toolkit.
//!
//! Every value has a default matching the stock behaviour, so an empty TOML
//! document is a valid configuration:
//!
//! ```toml
//! max_hoverables = 64
//! hover_delay = 0.4
//!
//! [tooltip]
//! anchor = [10.0, 10.0]
//! cursor_offset = [16.0, 16.0]
//! ```

use serde::Deserialize;

use crate::error::{UiError, UiResult};

/// Default number of tooltip registrations.
pub const MAX_HOVERABLES: usize = 256;

/// Default delay before a tooltip appears (seconds).
pub const DEFAULT_HOVER_DELAY: f32 = 0.7;

/// Maximum characters held by a text input.
pub const TEXT_CAPACITY: usize = 127;

/// Tooltip placement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipPlacement {
    /// Top-left corner used by tooltips drawn "at top".
    pub anchor: [f32; 2],
    /// Offset from the pointer for every other tooltip.
    pub cursor_offset: [f32; 2],
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            anchor: [10.0, 10.0],
            cursor_offset: [16.0, 16.0],
        }
    }
}

/// Toolkit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Capacity of the tooltip registry.
    pub max_hoverables: usize,
    /// Hover delay given to newly constructed widgets (seconds).
    pub hover_delay: f32,
    /// Caret blink half-period (seconds).
    pub caret_blink_period: f64,
    /// Hold time before backspace starts repeating (seconds).
    pub backspace_initial_delay: f64,
    /// Interval between repeated deletions (seconds).
    pub backspace_repeat: f64,
    /// Tooltip placement.
    pub tooltip: TooltipPlacement,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_hoverables: MAX_HOVERABLES,
            hover_delay: DEFAULT_HOVER_DELAY,
            caret_blink_period: 0.5,
            backspace_initial_delay: 0.3,
            backspace_repeat: 0.02,
            tooltip: TooltipPlacement::default(),
        }
    }
}

impl UiConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed TOML and
    /// [`UiError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> UiResult<()> {
        if self.max_hoverables == 0 {
            return Err(UiError::InvalidConfig("max_hoverables must be at least 1".into()));
        }
        if !(self.hover_delay >= 0.0) {
            return Err(UiError::InvalidConfig("hover_delay must be >= 0".into()));
        }
        if !(self.caret_blink_period > 0.0) {
            return Err(UiError::InvalidConfig("caret_blink_period must be > 0".into()));
        }
        if !(self.backspace_initial_delay >= 0.0) {
            return Err(UiError::InvalidConfig("backspace_initial_delay must be >= 0".into()));
        }
        if !(self.backspace_repeat > 0.0) {
            return Err(UiError::InvalidConfig("backspace_repeat must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.max_hoverables, 256);
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_toml_str(
            "hover_delay = 0.25\n[tooltip]\nanchor = [4.0, 8.0]\n",
        )
        .unwrap();
        assert!((config.hover_delay - 0.25).abs() < f32::EPSILON);
        assert_eq!(config.tooltip.anchor, [4.0, 8.0]);
        assert_eq!(config.tooltip.cursor_offset, [16.0, 16.0]);
        assert!((config.caret_blink_period - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = UiConfig::from_toml_str("max_hoverables = 0").unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = UiConfig::from_toml_str("hover_delay = [").unwrap_err();
        assert!(matches!(err, UiError::ConfigParse(_)));
    }
}
