//! GPIO indicator bank
//!
//! Drives the tri-color status LED and the alarm buzzer directly from
//! GPIO pins, one pin per output, all active-high.

use hygrotherm_core::indicator::LedColor;
use hygrotherm_core::traits::IndicatorOutputs;
use hygrotherm_hal::OutputPin;

/// LED/buzzer bank over four GPIO pins
pub struct GpioIndicator<P> {
    red: P,
    green: P,
    blue: P,
    buzzer: P,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create an indicator bank, forcing all outputs off
    pub fn new(red: P, green: P, blue: P, buzzer: P) -> Self {
        let mut bank = Self {
            red,
            green,
            blue,
            buzzer,
        };
        bank.set_led(None);
        bank.set_buzzer(false);
        bank
    }
}

impl<P: OutputPin> IndicatorOutputs for GpioIndicator<P> {
    fn set_led(&mut self, color: Option<LedColor>) {
        self.red.set_state(color == Some(LedColor::Red));
        self.green.set_state(color == Some(LedColor::Green));
        self.blue.set_state(color == Some(LedColor::Blue));
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set_state(on);
    }
}
