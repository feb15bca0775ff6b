//! Run options
//!
//! Nothing is persisted: every run starts from these defaults, optionally
//! overridden from the command line.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MILLIS_PER_FACTOR, RENDER_INTERVAL_MS, UPDATE_INTERVAL_MS};

/// Timer cadences and motion scaling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Period of the physics update timer
    pub update_interval: Duration,
    /// Period of the render timer
    pub render_interval: Duration,
    /// Elapsed milliseconds per unit of motion factor
    pub millis_per_factor: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_millis(UPDATE_INTERVAL_MS),
            render_interval: Duration::from_millis(RENDER_INTERVAL_MS),
            millis_per_factor: MILLIS_PER_FACTOR,
        }
    }
}

impl Settings {
    /// Settings with custom timer periods in milliseconds
    pub fn with_intervals(update_ms: u64, render_ms: u64) -> Self {
        Self {
            update_interval: Duration::from_millis(update_ms),
            render_interval: Duration::from_millis(render_ms),
            ..Self::default()
        }
        .sanitized()
    }

    /// Replace zero periods and divisors with the defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.update_interval.is_zero() {
            log::warn!("update interval of 0 ms, using {:?}", defaults.update_interval);
            self.update_interval = defaults.update_interval;
        }
        if self.render_interval.is_zero() {
            log::warn!("render interval of 0 ms, using {:?}", defaults.render_interval);
            self.render_interval = defaults.render_interval;
        }
        if self.millis_per_factor == 0 {
            self.millis_per_factor = defaults.millis_per_factor;
        }
        self
    }

    /// Motion factor for the time since the previous update; the remainder
    /// is dropped
    pub fn factor_for(&self, elapsed: Duration) -> u32 {
        let factor = elapsed.as_millis() / u128::from(self.millis_per_factor.max(1));
        u32::try_from(factor).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.update_interval, Duration::from_millis(10));
        assert_eq!(settings.render_interval, Duration::from_millis(32));
        assert_eq!(settings.millis_per_factor, 3);
    }

    #[test]
    fn test_factor_for() {
        let settings = Settings::default();
        assert_eq!(settings.factor_for(Duration::ZERO), 0);
        assert_eq!(settings.factor_for(Duration::from_micros(2_900)), 0);
        assert_eq!(settings.factor_for(Duration::from_millis(10)), 3);
        assert_eq!(settings.factor_for(Duration::from_millis(11)), 3);
        assert_eq!(settings.factor_for(Duration::from_millis(12)), 4);
    }

    #[test]
    fn test_sanitized_replaces_zeroes() {
        let settings = Settings::with_intervals(0, 0);
        assert_eq!(settings, Settings::default());

        let settings = Settings::with_intervals(5, 16);
        assert_eq!(settings.update_interval, Duration::from_millis(5));
        assert_eq!(settings.render_interval, Duration::from_millis(16));
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Settings::default());
    }
}
