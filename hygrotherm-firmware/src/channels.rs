//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. The sensor task is the only writer; each consumer has its own
//! signal so a slow display write cannot starve the indicator update.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use hygrotherm_core::AcquisitionOutcome;

/// Latest acquisition outcome for the display task
pub static DISPLAY_OUTCOME: Signal<CriticalSectionRawMutex, AcquisitionOutcome> = Signal::new();

/// Latest acquisition outcome for the indicator task
pub static INDICATOR_OUTCOME: Signal<CriticalSectionRawMutex, AcquisitionOutcome> = Signal::new();
