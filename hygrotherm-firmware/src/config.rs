//! Station configuration
//!
//! All configuration is compiled in; there is no runtime configuration
//! surface. Values live in plain structs with defaults so the wiring in
//! `main` stays readable and the constants stay data.

use hygrotherm_core::IndicatorConfig;
use hygrotherm_drivers::sensor::LinkTiming;

/// Complete station configuration
#[derive(Debug, Clone, Copy)]
pub struct StationConfig {
    /// Sensor polling period in milliseconds
    pub poll_period_ms: u64,
    /// Single-wire link timing
    pub link: LinkTiming,
    /// Indicator thresholds
    pub indicator: IndicatorConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            poll_period_ms: 1_000,
            link: LinkTiming::default(),
            indicator: IndicatorConfig::default(),
        }
    }
}
