//! Decoded sensor readings and per-poll acquisition outcomes
//!
//! The sensor transmits five raw bytes per acquisition: humidity integer
//! and fraction, temperature integer and fraction, and a checksum. The
//! checksum is the low byte of the sum of the four data bytes; it is the
//! only corruption detection the link carries.

/// Number of raw bytes in one sensor frame
pub const FRAME_LEN: usize = 5;

/// One validated temperature/humidity measurement
///
/// Only constructible from a frame whose checksum matches, so holding a
/// `Reading` is proof the frame passed validation. The fraction bytes
/// carry a single decimal digit (this sensor class reports one decimal
/// of precision); derived values compose integer plus tenths with no
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    humidity_integer: u8,
    humidity_fraction: u8,
    temperature_integer: u8,
    temperature_fraction: u8,
    checksum_raw: u8,
}

impl Reading {
    /// Validate a raw frame and decode it into a reading
    ///
    /// Frame layout: `[RH int, RH frac, T int, T frac, checksum]`.
    /// Returns `None` when the checksum does not match the wrapping sum
    /// of the four data bytes.
    pub fn from_raw(raw: [u8; FRAME_LEN]) -> Option<Self> {
        let sum = raw[0]
            .wrapping_add(raw[1])
            .wrapping_add(raw[2])
            .wrapping_add(raw[3]);

        if raw[4] != sum {
            return None;
        }

        Some(Self {
            humidity_integer: raw[0],
            humidity_fraction: raw[1],
            temperature_integer: raw[2],
            temperature_fraction: raw[3],
            checksum_raw: raw[4],
        })
    }

    /// Humidity integer byte as received
    pub fn humidity_integer(&self) -> u8 {
        self.humidity_integer
    }

    /// Humidity fraction byte as received (single decimal digit)
    pub fn humidity_fraction(&self) -> u8 {
        self.humidity_fraction
    }

    /// Temperature integer byte as received
    pub fn temperature_integer(&self) -> u8 {
        self.temperature_integer
    }

    /// Temperature fraction byte as received (single decimal digit)
    pub fn temperature_fraction(&self) -> u8 {
        self.temperature_fraction
    }

    /// Checksum byte as received
    pub fn checksum_raw(&self) -> u8 {
        self.checksum_raw
    }

    /// Temperature in degrees Celsius
    pub fn temperature_celsius(&self) -> f32 {
        self.temperature_integer as f32 + self.temperature_fraction as f32 / 10.0
    }

    /// Relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        self.humidity_integer as f32 + self.humidity_fraction as f32 / 10.0
    }

    /// Temperature in 0.1 degree Celsius units (e.g. 235 = 23.5 degrees)
    pub fn temperature_x10(&self) -> i16 {
        self.temperature_integer as i16 * 10 + self.temperature_fraction as i16
    }

    /// Relative humidity in 0.1 percent units
    pub fn humidity_x10(&self) -> i16 {
        self.humidity_integer as i16 * 10 + self.humidity_fraction as i16
    }
}

/// Result of one acquisition cycle
///
/// Created fresh each poll, consumed immediately by the rendering
/// tasks, never stored. All failure variants are expected, recoverable
/// conditions; the next scheduled poll is the retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionOutcome {
    /// Frame received and checksum-validated
    Ok(Reading),
    /// Sensor never acknowledged the start pulse
    NoResponse,
    /// A bit-level wait exceeded its iteration bound (line stuck)
    Timeout,
    /// Frame received but checksum validation failed
    ChecksumMismatch,
}

impl AcquisitionOutcome {
    /// Classify a completed sampling pass
    ///
    /// The timeout flag takes precedence over checksum validation: bits
    /// read after a timeout are forced to zero, and an all-zero tail can
    /// checksum-match by accident, so a timed-out frame must never be
    /// reported as valid.
    pub fn from_frame(raw: [u8; FRAME_LEN], timed_out: bool) -> Self {
        if timed_out {
            return Self::Timeout;
        }

        match Reading::from_raw(raw) {
            Some(reading) => Self::Ok(reading),
            None => Self::ChecksumMismatch,
        }
    }

    /// Check if this outcome carries a valid reading
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Get the reading, if any
    pub fn reading(&self) -> Option<Reading> {
        match self {
            Self::Ok(reading) => Some(*reading),
            _ => None,
        }
    }
}
