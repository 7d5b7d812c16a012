//! Threshold-based indicator policy
//!
//! Maps each acquisition outcome to the state of the tri-color LED, the
//! alarm buzzer, and the over-temperature warning flag that overrides
//! the display text. Pure logic; driving the actual pins is the job of
//! an `IndicatorOutputs` implementation.

use crate::reading::AcquisitionOutcome;

/// Status LED colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    /// Temperature above the warm threshold
    Red,
    /// Temperature within the comfort band
    Green,
    /// Temperature below the cold threshold
    Blue,
}

/// Indicator outputs for one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState {
    /// LED to light, or `None` for all off
    pub led: Option<LedColor>,
    /// Whether the alarm buzzer is on
    pub buzzer: bool,
    /// Whether the display should show the warning text instead of the
    /// reading
    pub warning: bool,
}

impl IndicatorState {
    /// All outputs off (failure outcomes)
    pub const OFF: Self = Self {
        led: None,
        buzzer: false,
        warning: false,
    };
}

/// Indicator policy configuration
///
/// Thresholds in 0.1 degree Celsius units.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// Below this the blue LED is lit (°C × 10)
    pub cold_x10: i16,
    /// Above this the red LED is lit and the warning shown (°C × 10)
    pub warm_x10: i16,
    /// Above this the buzzer sounds (°C × 10)
    pub alarm_x10: i16,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            cold_x10: 200,  // 20.0°C
            warm_x10: 250,  // 25.0°C
            alarm_x10: 250, // 25.0°C
        }
    }
}

/// Threshold-based indicator policy
#[derive(Debug, Clone, Copy)]
pub struct IndicatorPolicy {
    config: IndicatorConfig,
}

impl IndicatorPolicy {
    /// Create a policy with the given thresholds
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Evaluate one acquisition outcome
    ///
    /// Failure outcomes turn everything off; a checksum error is
    /// treated exactly like an absent sensor.
    pub fn evaluate(&self, outcome: &AcquisitionOutcome) -> IndicatorState {
        let reading = match outcome {
            AcquisitionOutcome::Ok(reading) => reading,
            _ => return IndicatorState::OFF,
        };

        let temp_x10 = reading.temperature_x10();

        let led = if temp_x10 > self.config.warm_x10 {
            LedColor::Red
        } else if temp_x10 >= self.config.cold_x10 {
            LedColor::Green
        } else {
            LedColor::Blue
        };

        IndicatorState {
            led: Some(led),
            buzzer: temp_x10 > self.config.alarm_x10,
            warning: temp_x10 > self.config.warm_x10,
        }
    }
}

impl Default for IndicatorPolicy {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;

    fn outcome(t_int: u8, t_frac: u8) -> AcquisitionOutcome {
        let sum = 40u8.wrapping_add(t_int).wrapping_add(t_frac);
        AcquisitionOutcome::Ok(Reading::from_raw([40, 0, t_int, t_frac, sum]).unwrap())
    }

    #[test]
    fn hot_reading_lights_red_and_sounds_alarm() {
        let state = IndicatorPolicy::default().evaluate(&outcome(26, 0));

        assert_eq!(state.led, Some(LedColor::Red));
        assert!(state.buzzer);
        assert!(state.warning);
    }

    #[test]
    fn comfort_band_lights_green() {
        let policy = IndicatorPolicy::default();

        for (t_int, t_frac) in [(20, 0), (22, 5), (25, 0)] {
            let state = policy.evaluate(&outcome(t_int, t_frac));
            assert_eq!(state.led, Some(LedColor::Green));
            assert!(!state.buzzer);
            assert!(!state.warning);
        }
    }

    #[test]
    fn cold_reading_lights_blue() {
        let state = IndicatorPolicy::default().evaluate(&outcome(19, 9));

        assert_eq!(state.led, Some(LedColor::Blue));
        assert!(!state.buzzer);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let policy = IndicatorPolicy::default();

        // Exactly 25.0°C is still green, 25.1°C is red
        assert_eq!(policy.evaluate(&outcome(25, 0)).led, Some(LedColor::Green));
        assert_eq!(policy.evaluate(&outcome(25, 1)).led, Some(LedColor::Red));

        // Exactly 20.0°C is green, 19.9°C is blue
        assert_eq!(policy.evaluate(&outcome(20, 0)).led, Some(LedColor::Green));
        assert_eq!(policy.evaluate(&outcome(19, 9)).led, Some(LedColor::Blue));
    }

    #[test]
    fn failures_turn_everything_off() {
        let policy = IndicatorPolicy::default();

        for outcome in [
            AcquisitionOutcome::NoResponse,
            AcquisitionOutcome::Timeout,
            AcquisitionOutcome::ChecksumMismatch,
        ] {
            assert_eq!(policy.evaluate(&outcome), IndicatorState::OFF);
        }
    }
}
