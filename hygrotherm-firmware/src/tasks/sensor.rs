//! Sensor polling task
//!
//! Runs one acquisition per fixed period and fans the outcome out to
//! the display and indicator tasks. Failures are per-cycle conditions;
//! the next tick is the retry, with no backoff or escalation.

use defmt::*;
use embassy_time::{Delay, Duration, Ticker};

use hygrotherm_core::traits::ClimateSensor;
use hygrotherm_core::AcquisitionOutcome;
use hygrotherm_drivers::sensor::Dht11Link;
use hygrotherm_hal_rp2040::gpio::RpIoLine;

use crate::channels::{DISPLAY_OUTCOME, INDICATOR_OUTCOME};

/// Sensor link as wired on the board
pub type StationSensor = Dht11Link<RpIoLine<'static>, Delay>;

/// Sensor polling task
#[embassy_executor::task]
pub async fn sensor_task(mut sensor: StationSensor, poll_period_ms: u64) {
    info!("Sensor task started (period {}ms)", poll_period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(poll_period_ms));

    loop {
        ticker.next().await;

        // Blocking for the whole transaction; the bit timing does not
        // survive yielding to the executor mid-acquisition.
        let outcome = sensor.acquire();

        match &outcome {
            AcquisitionOutcome::Ok(reading) => {
                info!(
                    "Reading: T={}.{}degC RH={}.{}%",
                    reading.temperature_integer(),
                    reading.temperature_fraction(),
                    reading.humidity_integer(),
                    reading.humidity_fraction()
                );
            }
            AcquisitionOutcome::NoResponse => warn!("No response from sensor"),
            AcquisitionOutcome::Timeout => warn!("Sensor bit timing violated, read timed out"),
            AcquisitionOutcome::ChecksumMismatch => warn!("Sensor frame failed checksum"),
        }

        DISPLAY_OUTCOME.signal(outcome);
        INDICATOR_OUTCOME.signal(outcome);
    }
}
