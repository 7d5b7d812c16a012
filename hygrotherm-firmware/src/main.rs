//! Hygrotherm - Climate Station Firmware
//!
//! Main firmware binary for RP2040-based temperature/humidity monitors.
//! A DHT11-class sensor is polled over its single-wire link once per
//! second; each outcome drives a 16x2 character panel, a tri-color
//! status LED, and an alarm buzzer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use hygrotherm_core::IndicatorPolicy;
use hygrotherm_drivers::display::Hd44780;
use hygrotherm_drivers::indicator::GpioIndicator;
use hygrotherm_drivers::sensor::Dht11Link;
use hygrotherm_hal_rp2040::gpio::{RpIoLine, RpOutput};

use crate::config::StationConfig;

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hygrotherm firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = StationConfig::default();

    // Sensor data line on GPIO16 (board carries the 5.1k pull-up)
    let line = RpIoLine::new(Flex::new(p.PIN_16));
    let sensor = Dht11Link::with_timing(line, Delay, config.link);

    info!("Sensor link initialized");

    // Display bus: RS/RW/EN on GPIO2-4, D4-D7 on GPIO5-8
    let display = Hd44780::new(
        RpOutput::new(Output::new(p.PIN_2, Level::Low)),
        RpOutput::new(Output::new(p.PIN_3, Level::Low)),
        RpOutput::new(Output::new(p.PIN_4, Level::Low)),
        [
            RpOutput::new(Output::new(p.PIN_5, Level::Low)),
            RpOutput::new(Output::new(p.PIN_6, Level::Low)),
            RpOutput::new(Output::new(p.PIN_7, Level::Low)),
            RpOutput::new(Output::new(p.PIN_8, Level::Low)),
        ],
        Delay,
    );

    // Indicator bank: red/green/blue LEDs on GPIO10-12, buzzer on GPIO13
    let indicator = GpioIndicator::new(
        RpOutput::new(Output::new(p.PIN_10, Level::Low)),
        RpOutput::new(Output::new(p.PIN_11, Level::Low)),
        RpOutput::new(Output::new(p.PIN_12, Level::Low)),
        RpOutput::new(Output::new(p.PIN_13, Level::Low)),
    );

    info!("Display and indicator outputs initialized");

    let policy = IndicatorPolicy::new(config.indicator);

    // Spawn tasks
    spawner
        .spawn(tasks::sensor_task(sensor, config.poll_period_ms))
        .unwrap();
    spawner.spawn(tasks::display_task(display, policy)).unwrap();
    spawner
        .spawn(tasks::indicator_task(indicator, policy))
        .unwrap();

    info!("All tasks spawned, station running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
