// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and layout knobs.

use thiserror::Error;

/// Rejected [`LegendConfig`] values.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The stacking threshold is negative, infinite, or NaN.
    #[error("stack width threshold must be finite and non-negative, got {0}")]
    InvalidStackThreshold(f64),
    /// A zero-length lock would let a racing show re-open a dismissed tooltip.
    #[error("tooltip lock must last at least 1ms")]
    ZeroTooltipLock,
}

/// Timing and layout configuration for a [`ChartLegend`](crate::ChartLegend).
///
/// All delays are in milliseconds. The defaults match the behavior users
/// expect from a pointer-driven legend: highlights clear 50ms after the pointer
/// leaves (so moving between neighbours does not flicker), tooltips open on the
/// next tick and linger 50ms so the pointer can travel into them, and
/// scroll-into-view waits 100ms for keyboard bursts to settle.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    /// Delay before a hover or focus highlight is announced.
    pub highlight_enter_delay_ms: u64,
    /// Delay before a highlight is cleared after pointer leave or blur.
    pub highlight_exit_delay_ms: u64,
    /// Delay before a tooltip opens.
    pub tooltip_show_delay_ms: u64,
    /// Delay before a tooltip closes.
    pub tooltip_hide_delay_ms: u64,
    /// How long an Escape dismissal blocks new tooltip requests.
    pub tooltip_lock_ms: u64,
    /// Delay between a highlight change and scrolling the item into view.
    pub scroll_delay_ms: u64,
    /// Container width (logical px) below which dual-axis rows are stacked.
    pub stack_width_threshold: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            highlight_enter_delay_ms: 0,
            highlight_exit_delay_ms: 50,
            tooltip_show_delay_ms: 0,
            tooltip_hide_delay_ms: 50,
            tooltip_lock_ms: 100,
            scroll_delay_ms: 100,
            stack_width_threshold: 400.0,
        }
    }
}

impl LegendConfig {
    /// Checks every field for values the legend cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.stack_width_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidStackThreshold(threshold));
        }
        if self.tooltip_lock_ms == 0 {
            return Err(ConfigError::ZeroTooltipLock);
        }
        Ok(())
    }

    /// Sets the stacking threshold.
    pub fn with_stack_width_threshold(mut self, px: f64) -> Result<Self, ConfigError> {
        self.stack_width_threshold = px;
        self.validate().map(|()| self)
    }

    /// Sets the highlight exit delay.
    #[must_use]
    pub fn with_highlight_exit_delay(mut self, ms: u64) -> Self {
        self.highlight_exit_delay_ms = ms;
        self
    }

    /// Sets the scroll-into-view delay.
    #[must_use]
    pub fn with_scroll_delay(mut self, ms: u64) -> Self {
        self.scroll_delay_ms = ms;
        self
    }

    /// Sets the tooltip show and hide delays.
    #[must_use]
    pub fn with_tooltip_delays(mut self, show_ms: u64, hide_ms: u64) -> Self {
        self.tooltip_show_delay_ms = show_ms;
        self.tooltip_hide_delay_ms = hide_ms;
        self
    }

    /// Sets the Escape lock duration.
    pub fn with_tooltip_lock(mut self, ms: u64) -> Result<Self, ConfigError> {
        self.tooltip_lock_ms = ms;
        self.validate().map(|()| self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LegendConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.highlight_exit_delay_ms, 50);
        assert_eq!(config.scroll_delay_ms, 100);
        assert_eq!(config.tooltip_hide_delay_ms, 50);
        assert_eq!(config.stack_width_threshold, 400.0);
    }

    #[test]
    fn rejects_bad_thresholds() {
        assert!(matches!(
            LegendConfig::default().with_stack_width_threshold(-1.0),
            Err(ConfigError::InvalidStackThreshold(_))
        ));
        assert!(matches!(
            LegendConfig::default().with_stack_width_threshold(f64::NAN),
            Err(ConfigError::InvalidStackThreshold(_))
        ));
        assert!(LegendConfig::default().with_stack_width_threshold(320.0).is_ok());
    }

    #[test]
    fn rejects_zero_lock() {
        assert_eq!(
            LegendConfig::default().with_tooltip_lock(0),
            Err(ConfigError::ZeroTooltipLock)
        );
    }
}
