//! RP2040 GPIO implementations
//!
//! Thin wrappers adapting `embassy-rp` pin types to the shared
//! `hygrotherm-hal` traits.

use embassy_rp::gpio::{Flex, Output, Pull};

use hygrotherm_hal::{IoLine, OutputPin};

/// Push-pull output pin backed by `embassy_rp::gpio::Output`
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap an already-configured embassy output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Bidirectional data line backed by `embassy_rp::gpio::Flex`
///
/// The pull-up is enabled so the line idles high whenever neither the
/// host nor the device drives it, which is what single-wire sensor
/// buses expect between transactions.
pub struct RpIoLine<'d> {
    pin: Flex<'d>,
}

impl<'d> RpIoLine<'d> {
    /// Wrap a flex pin, leaving it in input mode with the pull-up on
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }
}

impl IoLine for RpIoLine<'_> {
    fn set_output(&mut self) {
        self.pin.set_as_output();
    }

    fn set_input(&mut self) {
        self.pin.set_as_input();
    }

    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
