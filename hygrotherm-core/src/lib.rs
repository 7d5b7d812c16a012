//! Board-agnostic core logic for the climate station firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Decoded sensor reading and per-poll acquisition outcome types
//! - Checksum validation for the five-byte sensor frame
//! - Threshold-based indicator policy (LED color, buzzer, warning)
//! - Display frame rendering for the 16x2 character panel
//! - Hardware abstraction traits (sensor, display, indicator outputs)

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod reading;
pub mod render;
pub mod traits;

pub use indicator::{IndicatorConfig, IndicatorPolicy, IndicatorState, LedColor};
pub use reading::{AcquisitionOutcome, Reading};
