//! Climate sensor trait

use crate::reading::AcquisitionOutcome;

/// Trait for temperature/humidity sensors
///
/// Implementations drive whatever link the sensor speaks and report
/// every poll as an [`AcquisitionOutcome`]; link failures are data, not
/// errors, because the control loop treats them all the same way (show,
/// then retry on the next poll).
pub trait ClimateSensor {
    /// Run one complete acquisition
    ///
    /// Blocking for the full duration of the transaction. Takes
    /// `&mut self` because the sensor link is exclusively owned for
    /// the duration of the call.
    fn acquire(&mut self) -> AcquisitionOutcome;
}
