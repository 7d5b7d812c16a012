//! RP2040-specific HAL for the climate station firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hygrotherm-hal` traits:
//!
//! - [`gpio::RpOutput`] - push-pull output over `embassy_rp::gpio::Output`
//! - [`gpio::RpIoLine`] - bidirectional line over `embassy_rp::gpio::Flex`
//!
//! Delay needs no adapter: `embassy_time::Delay` already implements
//! `embedded_hal::delay::DelayNs`, which the drivers consume directly.

#![no_std]

pub mod gpio;

// Re-export shared traits from hygrotherm-hal for convenience
pub use hygrotherm_hal::{IoLine, OutputPin};
