//! Hygrotherm Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040, etc.). This enables the same driver and
//! application code to run on different hardware platforms, and against
//! in-memory simulations in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (hygrotherm-drivers)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hygrotherm-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hygrotherm-hal-rp2040                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Push-pull digital output
//! - [`gpio::IoLine`] - Bidirectional data line with direction control
//!
//! Delay is deliberately not abstracted here: drivers take the ecosystem
//! trait `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{IoLine, OutputPin};
