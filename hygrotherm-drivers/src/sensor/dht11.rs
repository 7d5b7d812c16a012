//! DHT11-class single-wire sensor link
//!
//! The sensor shares one data line with the host. The host requests a
//! reading with a long low start pulse, the sensor acknowledges with a
//! low/high handshake, then clocks out 40 bits where the bit value is
//! encoded in the duration of the high phase (pulse-width
//! discrimination), MSB first within each of the five bytes.
//!
//! There is no framing and no CRC beyond a one-byte sum, so every bit
//! decision rests on the wait bounds in [`LinkTiming`]. A stuck line
//! trips the bound, the remaining bits degrade to zero, and the pass is
//! reported as a timeout; checksum validation catches whatever slips
//! through.

use embedded_hal::delay::DelayNs;

use hygrotherm_core::reading::{AcquisitionOutcome, FRAME_LEN};
use hygrotherm_core::traits::ClimateSensor;
use hygrotherm_hal::IoLine;

use super::timing::BoundedWait;

/// Link timing parameters
///
/// All delays in microseconds unless noted. Defaults carry margin over
/// the vendor minimums (the 25 ms start pulse against a mandated 18 ms).
#[derive(Debug, Clone, Copy)]
pub struct LinkTiming {
    /// Start pulse low duration in milliseconds (vendor minimum 18)
    pub start_low_ms: u32,
    /// Release window after the start pulse (vendor window 20-40 us)
    pub start_release_us: u32,
    /// Settle delay before sampling the ack low phase
    pub ack_low_sample_us: u32,
    /// Delay from the ack low sample to the ack high sample
    pub ack_high_sample_us: u32,
    /// Delay from a good handshake to the first bit's low phase
    pub data_lead_us: u32,
    /// Delay from a bit's rising edge to its level sample; a zero's
    /// high phase is shorter than this, a one's is longer
    pub bit_sample_us: u32,
    /// Per-bit wait budget in 1 us poll iterations
    pub bit_wait_bound: u16,
}

impl Default for LinkTiming {
    fn default() -> Self {
        Self {
            start_low_ms: 25,
            start_release_us: 30,
            ack_low_sample_us: 40,
            ack_high_sample_us: 80,
            data_lead_us: 50,
            bit_sample_us: 30,
            bit_wait_bound: 100,
        }
    }
}

/// Single-wire sensor link driver
///
/// Exclusively owns the data line; direction is switched to input
/// before the handshake and never driven again, so the line is back in
/// a known state on every return path.
pub struct Dht11Link<L, D> {
    line: L,
    delay: D,
    timing: LinkTiming,
}

impl<L: IoLine, D: DelayNs> Dht11Link<L, D> {
    /// Create a link with default timing
    pub fn new(line: L, delay: D) -> Self {
        Self::with_timing(line, delay, LinkTiming::default())
    }

    /// Create a link with explicit timing parameters
    pub fn with_timing(line: L, delay: D, timing: LinkTiming) -> Self {
        Self {
            line,
            delay,
            timing,
        }
    }

    /// Drive the start pulse and hand the line to the sensor
    fn start_pulse(&mut self) {
        self.line.set_output();
        self.line.set_low();
        self.delay.delay_ms(self.timing.start_low_ms);
        self.line.set_high();
        self.delay.delay_us(self.timing.start_release_us);
        self.line.set_input();
    }

    /// Detect the sensor's low/high acknowledge sequence
    ///
    /// Returns `false` when the line is not at the expected level at
    /// either sample point; the sensor is absent or not yet settled.
    fn await_ack(&mut self) -> bool {
        self.delay.delay_us(self.timing.ack_low_sample_us);
        if self.line.is_high() {
            return false;
        }

        self.delay.delay_us(self.timing.ack_high_sample_us);
        if self.line.is_low() {
            return false;
        }

        self.delay.delay_us(self.timing.data_lead_us);
        true
    }

    /// Sample the 40-bit frame
    ///
    /// Each bit shares one wait budget across its low and high phase.
    /// Once any bit trips the bound, the remaining bits are recorded as
    /// zero without touching the line; the pass still runs to the
    /// 40-bit end so the caller sees a complete frame plus the flag.
    fn sample_frame(&mut self) -> ([u8; FRAME_LEN], bool) {
        let Self {
            line,
            delay,
            timing,
        } = self;

        let wait = BoundedWait::new(timing.bit_wait_bound);
        let mut bytes = [0u8; FRAME_LEN];
        let mut timed_out = false;

        for bit in 0..FRAME_LEN * 8 {
            if timed_out {
                continue;
            }

            let mut cycles: u16 = 0;

            // Low phase: lead-in before the value-bearing high phase
            if !wait.wait_while(delay, &mut cycles, || line.is_low()) {
                timed_out = true;
                continue;
            }

            delay.delay_us(timing.bit_sample_us);

            // Still high after the sample delay means a long pulse: a
            // one. The high phase must then fully elapse before the
            // next bit's low phase can be told apart.
            if line.is_high() {
                bytes[bit / 8] |= 1 << (7 - bit % 8);
                if !wait.wait_while(delay, &mut cycles, || line.is_high()) {
                    timed_out = true;
                }
            }
        }

        (bytes, timed_out)
    }
}

impl<L: IoLine, D: DelayNs> ClimateSensor for Dht11Link<L, D> {
    fn acquire(&mut self) -> AcquisitionOutcome {
        self.start_pulse();

        if !self.await_ack() {
            return AcquisitionOutcome::NoResponse;
        }

        let (raw, timed_out) = self.sample_frame();
        AcquisitionOutcome::from_frame(raw, timed_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use heapless::Vec;

    /// Time the driver releases the line, with default timing
    const T_RELEASE_US: u64 = 25_000 + 30;

    /// Shared virtual time base for the simulated line and delay
    struct SimBus {
        now_ns: Cell<u64>,
        reads: Cell<u32>,
        input_mode: Cell<bool>,
    }

    impl SimBus {
        fn new() -> Self {
            Self {
                now_ns: Cell::new(0),
                reads: Cell::new(0),
                input_mode: Cell::new(true),
            }
        }

        fn now_us(&self) -> u64 {
            self.now_ns.get() / 1_000
        }
    }

    /// Delay that advances virtual time instead of sleeping
    struct SimDelay<'a> {
        bus: &'a SimBus,
    }

    impl DelayNs for SimDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.bus.now_ns.set(self.bus.now_ns.get() + ns as u64);
        }
    }

    /// Line whose level follows a schedule of (time_us, level) edges
    ///
    /// The line idles high (bus pull-up); host writes are ignored
    /// because the schedule only describes the device-driven phases.
    struct SimLine<'a> {
        bus: &'a SimBus,
        edges: &'a [(u64, bool)],
    }

    impl IoLine for SimLine<'_> {
        fn set_output(&mut self) {
            self.bus.input_mode.set(false);
        }

        fn set_input(&mut self) {
            self.bus.input_mode.set(true);
        }

        fn set_high(&mut self) {}
        fn set_low(&mut self) {}

        fn is_high(&self) -> bool {
            self.bus.reads.set(self.bus.reads.get() + 1);
            let now = self.bus.now_us();
            let mut level = true;
            for &(t, l) in self.edges {
                if t <= now {
                    level = l;
                } else {
                    break;
                }
            }
            level
        }
    }

    /// Emit the ack handshake, ending inside the sensor's high phase
    fn push_ack(edges: &mut Vec<(u64, bool), 128>, t: &mut u64) {
        *t = T_RELEASE_US + 10;
        edges.push((*t, false)).unwrap();
        *t += 80;
        edges.push((*t, true)).unwrap();
        *t += 70;
    }

    /// Emit the data bits for `bytes`, MSB first
    fn push_bits(edges: &mut Vec<(u64, bool), 128>, t: &mut u64, bytes: &[u8]) {
        for &byte in bytes {
            for bit in (0..8).rev() {
                edges.push((*t, false)).unwrap();
                *t += 50;
                edges.push((*t, true)).unwrap();
                *t += if byte & (1 << bit) != 0 { 70 } else { 26 };
            }
        }
    }

    /// Complete device schedule for a full five-byte frame
    fn frame_edges(bytes: [u8; FRAME_LEN]) -> Vec<(u64, bool), 128> {
        let mut edges = Vec::new();
        let mut t = 0;
        push_ack(&mut edges, &mut t);
        push_bits(&mut edges, &mut t, &bytes);
        // End of frame: sensor pulls low briefly, then releases the bus
        edges.push((t, false)).unwrap();
        edges.push((t + 50, true)).unwrap();
        edges
    }

    fn acquire_with(edges: &[(u64, bool)]) -> (AcquisitionOutcome, u64, u32) {
        let bus = SimBus::new();
        let mut link = Dht11Link::new(
            SimLine { bus: &bus, edges },
            SimDelay { bus: &bus },
        );
        let outcome = link.acquire();
        // The line must be handed back in input mode on every return
        // path, or the next acquisition would fight the sensor for it
        assert!(bus.input_mode.get());
        (outcome, bus.now_us(), bus.reads.get())
    }

    #[test]
    fn fixture_frame_round_trips() {
        // RH 45.0, T 23.5, checksum 45 + 0 + 23 + 5 = 73
        let edges = frame_edges([45, 0, 23, 5, 73]);

        let (outcome, _, _) = acquire_with(&edges);

        let reading = outcome.reading().expect("valid frame should decode");
        assert_eq!(reading.temperature_celsius(), 23.5);
        assert_eq!(reading.humidity_percent(), 45.0);
    }

    #[test]
    fn msb_first_bit_order() {
        // 0x80 + 0x02 + 0xFF + 0x55 = 0x1D6, checksum 0xD6
        let edges = frame_edges([0x80, 0x02, 0xFF, 0x55, 0xD6]);

        let (outcome, _, _) = acquire_with(&edges);

        let reading = outcome.reading().expect("valid frame should decode");
        assert_eq!(reading.humidity_integer(), 0x80);
        assert_eq!(reading.humidity_fraction(), 0x02);
        assert_eq!(reading.temperature_integer(), 0xFF);
        assert_eq!(reading.temperature_fraction(), 0x55);
    }

    #[test]
    fn corrupt_frame_reports_checksum_mismatch() {
        let edges = frame_edges([45, 0, 23, 5, 74]);

        let (outcome, _, _) = acquire_with(&edges);

        assert_eq!(outcome, AcquisitionOutcome::ChecksumMismatch);
    }

    #[test]
    fn silent_line_reports_no_response() {
        // No edges: the pull-up keeps the line high forever
        let (outcome, now_us, reads) = acquire_with(&[]);

        assert_eq!(outcome, AcquisitionOutcome::NoResponse);
        // One sample at the ack check, no bits read
        assert_eq!(reads, 1);
        // Detected within the ack window, not after some longer wait
        assert!(now_us <= T_RELEASE_US + 40);
    }

    #[test]
    fn missing_ack_high_reports_no_response() {
        // Sensor pulls low but never releases
        let edges = [(T_RELEASE_US + 10, false)];

        let (outcome, _, reads) = acquire_with(&edges);

        assert_eq!(outcome, AcquisitionOutcome::NoResponse);
        assert_eq!(reads, 2);
    }

    #[test]
    fn stuck_line_reports_timeout_without_hanging() {
        // Handshake completes, then the line sticks low through every
        // bit window
        let edges = [
            (T_RELEASE_US + 10, false),
            (T_RELEASE_US + 90, true),
            (T_RELEASE_US + 160, false),
        ];

        let (outcome, now_us, _) = acquire_with(&edges);

        assert_eq!(outcome, AcquisitionOutcome::Timeout);
        // One exhausted wait budget, not 40 of them and not an open loop
        assert!(now_us < T_RELEASE_US + 1_000);
    }

    #[test]
    fn mid_frame_stall_reports_timeout() {
        // Two good bytes, then the line sticks low. The degraded tail
        // is all zeroes, which would checksum-match; the timeout flag
        // must win.
        let mut edges: Vec<(u64, bool), 128> = Vec::new();
        let mut t = 0;
        push_ack(&mut edges, &mut t);
        push_bits(&mut edges, &mut t, &[45, 0]);
        edges.push((t, false)).unwrap();

        let (outcome, now_us, _) = acquire_with(&edges);

        assert_eq!(outcome, AcquisitionOutcome::Timeout);
        assert!(now_us < T_RELEASE_US + 20_000);
    }

    #[test]
    fn all_zero_frame_is_valid() {
        // 0 + 0 + 0 + 0 = 0: a legitimate frame, not to be confused
        // with a degraded one
        let edges = frame_edges([0, 0, 0, 0, 0]);

        let (outcome, _, _) = acquire_with(&edges);

        let reading = outcome.reading().expect("all-zero frame checksums");
        assert_eq!(reading.temperature_celsius(), 0.0);
    }
}
