//! Display frame rendering
//!
//! Builds 16x2 text frames for the character panel. Each polling cycle
//! renders exactly one of four message classes: the reading itself, the
//! over-temperature warning, or one of the failure messages.
//!
//! Frames hold raw display-charset bytes rather than UTF-8 because the
//! panel's ROM maps the degree symbol to 0xDF.

use crate::reading::{AcquisitionOutcome, Reading};

/// Panel width in characters
pub const DISPLAY_COLS: usize = 16;

/// Panel height in rows
pub const DISPLAY_ROWS: usize = 2;

/// Degree symbol in the panel's character ROM
pub const DEGREE: u8 = 0xDF;

/// Reading templates; digits are patched in at fixed offsets
const TEMP_TEMPLATE: &[u8; DISPLAY_COLS] = b"Temp = 00.0\xDFC   ";
const HUMIDITY_TEMPLATE: &[u8; DISPLAY_COLS] = b"RH   = 00.0 %   ";

/// One rendered frame for the 16x2 panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    rows: [[u8; DISPLAY_COLS]; DISPLAY_ROWS],
}

impl Frame {
    /// A frame of spaces
    pub const fn blank() -> Self {
        Self {
            rows: [[b' '; DISPLAY_COLS]; DISPLAY_ROWS],
        }
    }

    /// Get one row of display bytes
    pub fn row(&self, row: usize) -> &[u8; DISPLAY_COLS] {
        &self.rows[row]
    }

    /// Write bytes at a position, clipping at the right edge
    fn put(&mut self, row: usize, col: usize, text: &[u8]) {
        let row = &mut self.rows[row];
        for (i, &b) in text.iter().enumerate() {
            match row.get_mut(col + i) {
                Some(cell) => *cell = b,
                None => break,
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

/// Render the frame for one acquisition outcome
///
/// `warning` comes from the indicator policy and overrides the reading
/// text with the warning message, matching the panel behavior of the
/// deployed units.
pub fn frame_for(outcome: &AcquisitionOutcome, warning: bool) -> Frame {
    match outcome {
        AcquisitionOutcome::Ok(_) if warning => warning_frame(),
        AcquisitionOutcome::Ok(reading) => reading_frame(reading),
        AcquisitionOutcome::Timeout => timeout_frame(),
        AcquisitionOutcome::NoResponse => no_response_frame(),
        AcquisitionOutcome::ChecksumMismatch => checksum_frame(),
    }
}

/// Render a valid reading onto the two templates
pub fn reading_frame(reading: &Reading) -> Frame {
    let mut frame = Frame::blank();
    frame.put(0, 0, TEMP_TEMPLATE);
    frame.put(1, 0, HUMIDITY_TEMPLATE);

    patch_value(
        &mut frame,
        0,
        reading.temperature_integer(),
        reading.temperature_fraction(),
    );
    patch_value(
        &mut frame,
        1,
        reading.humidity_integer(),
        reading.humidity_fraction(),
    );

    frame
}

/// Over-temperature warning, overrides the reading text
pub fn warning_frame() -> Frame {
    let mut frame = Frame::blank();
    frame.put(0, 4, b"Warning");
    frame
}

/// Bit-timing violation during sampling
pub fn timeout_frame() -> Frame {
    let mut frame = Frame::blank();
    frame.put(0, 4, b"Time out!");
    frame
}

/// Sensor never acknowledged the start pulse
pub fn no_response_frame() -> Frame {
    let mut frame = Frame::blank();
    frame.put(0, 2, b"No response");
    frame.put(1, 0, b"from the sensor");
    frame
}

/// Frame received but failed validation
pub fn checksum_frame() -> Frame {
    let mut frame = Frame::blank();
    frame.put(0, 0, b"Checksum Error!");
    frame
}

/// Patch `II.F` digits into a reading template row
///
/// Template offsets: integer tens at 7, integer units at 8, the single
/// fraction digit at 10.
fn patch_value(frame: &mut Frame, row: usize, integer: u8, fraction: u8) {
    frame.rows[row][7] = b'0' + integer / 10 % 10;
    frame.rows[row][8] = b'0' + integer % 10;
    frame.rows[row][10] = b'0' + fraction % 10;
}
