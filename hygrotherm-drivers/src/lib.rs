//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hygrotherm-core for the station's hardware:
//!
//! - Single-wire climate sensor link (DHT11 class)
//! - HD44780-compatible character display (4-bit bus)
//! - GPIO indicator bank (tri-color LED, buzzer)
//!
//! All drivers are generic over the hygrotherm-hal pin traits and
//! `embedded_hal::delay::DelayNs`, so they run unmodified against real
//! pins or the in-memory simulations used in tests.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod sensor;
