//! Indicator output trait

use crate::indicator::{IndicatorState, LedColor};

/// Trait for the LED/buzzer output bank
///
/// Implementations control the physical indicators; the policy decides
/// what they should show.
pub trait IndicatorOutputs {
    /// Light exactly one LED, or none
    fn set_led(&mut self, color: Option<LedColor>);

    /// Turn the alarm buzzer on or off
    fn set_buzzer(&mut self, on: bool);

    /// Apply a complete policy decision
    fn apply(&mut self, state: &IndicatorState) {
        self.set_led(state.led);
        self.set_buzzer(state.buzzer);
    }
}
