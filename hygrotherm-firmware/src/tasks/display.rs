//! Display task
//!
//! Waits for each acquisition outcome and redraws the 16x2 panel with
//! the matching message class.

use defmt::*;
use embassy_time::Delay;

use hygrotherm_core::render::{frame_for, DISPLAY_ROWS};
use hygrotherm_core::traits::CharacterDisplay;
use hygrotherm_core::IndicatorPolicy;
use hygrotherm_drivers::display::Hd44780;
use hygrotherm_hal_rp2040::gpio::RpOutput;

use crate::channels::DISPLAY_OUTCOME;

/// Display driver as wired on the board
pub type StationDisplay = Hd44780<RpOutput<'static>, Delay>;

/// Display task
#[embassy_executor::task]
pub async fn display_task(mut display: StationDisplay, policy: IndicatorPolicy) {
    info!("Display task started");

    display.init();

    loop {
        let outcome = DISPLAY_OUTCOME.wait().await;

        // The warning text overrides the reading, matching the
        // indicator policy's over-temperature decision
        let warning = policy.evaluate(&outcome).warning;
        let frame = frame_for(&outcome, warning);

        display.clear();
        for row in 0..DISPLAY_ROWS {
            display.set_cursor(row as u8, 0);
            display.write_bytes(frame.row(row));
        }
    }
}
