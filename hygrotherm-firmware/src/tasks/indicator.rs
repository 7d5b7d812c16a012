//! Indicator task
//!
//! Applies the threshold policy to each acquisition outcome and drives
//! the LED/buzzer bank.

use defmt::*;

use hygrotherm_core::traits::IndicatorOutputs;
use hygrotherm_core::IndicatorPolicy;
use hygrotherm_drivers::indicator::GpioIndicator;
use hygrotherm_hal_rp2040::gpio::RpOutput;

use crate::channels::INDICATOR_OUTCOME;

/// Indicator bank as wired on the board
pub type StationIndicator = GpioIndicator<RpOutput<'static>>;

/// Indicator task
#[embassy_executor::task]
pub async fn indicator_task(mut outputs: StationIndicator, policy: IndicatorPolicy) {
    info!("Indicator task started");

    loop {
        let outcome = INDICATOR_OUTCOME.wait().await;
        let state = policy.evaluate(&outcome);

        if state.warning {
            warn!("Over-temperature warning active");
        }

        outputs.apply(&state);
    }
}
