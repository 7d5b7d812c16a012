//! HD44780-compatible character display driver
//!
//! Drives a 16x2 text panel over a 4-bit parallel bus (RS, RW, EN,
//! D4-D7). The panel has no feedback channel: every transfer is a
//! nibble pair latched by an enable pulse followed by a fixed execution
//! wait, so the driver is write-only and infallible.

use embedded_hal::delay::DelayNs;

use hygrotherm_core::traits::CharacterDisplay;
use hygrotherm_hal::OutputPin;

/// HD44780 commands
mod cmd {
    /// Put the controller in 4-bit mode
    pub const INIT_4BIT: u8 = 0x02;
    /// 4-bit bus, 2 lines, 5x7 font
    pub const FUNCTION_SET: u8 = 0x28;
    /// Display on, cursor off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Auto-increment cursor after each write
    pub const ENTRY_MODE: u8 = 0x06;
    /// Clear display and home the cursor
    pub const CLEAR: u8 = 0x01;
    /// DDRAM address of row 0
    pub const ROW0_ADDR: u8 = 0x80;
    /// DDRAM address of row 1
    pub const ROW1_ADDR: u8 = 0xC0;
}

/// Minimum enable pulse width in microseconds
const ENABLE_PULSE_US: u32 = 1;

/// Execution wait after each nibble in microseconds
const EXECUTE_WAIT_US: u32 = 100;

/// Clear/home commands need a longer wait, in milliseconds
const CLEAR_WAIT_MS: u32 = 2;

/// Power-on stabilization wait in milliseconds
const POWER_ON_WAIT_MS: u32 = 20;

/// HD44780 display over a 4-bit bus
///
/// `data[0]` is D4 (nibble bit 0) through `data[3]` as D7.
pub struct Hd44780<P, D> {
    rs: P,
    rw: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver over the given bus pins
    ///
    /// The panel is not touched until [`CharacterDisplay::init`] runs.
    pub fn new(rs: P, rw: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            rw,
            en,
            data,
            delay,
        }
    }

    /// Put one nibble on D4-D7 and latch it with an enable pulse
    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(nibble & (1 << bit) != 0);
        }

        self.en.set_high();
        self.delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low();
        self.delay.delay_us(EXECUTE_WAIT_US);
    }

    /// Send a byte as two nibbles, high nibble first
    fn write_split(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    /// Send a command byte (RS low)
    fn command(&mut self, command: u8) {
        self.rs.set_low();
        self.rw.set_low();
        self.write_split(command);
    }
}

impl<P: OutputPin, D: DelayNs> CharacterDisplay for Hd44780<P, D> {
    fn init(&mut self) {
        self.delay.delay_ms(POWER_ON_WAIT_MS);

        self.command(cmd::INIT_4BIT);
        self.command(cmd::FUNCTION_SET);
        self.command(cmd::DISPLAY_ON);
        self.command(cmd::ENTRY_MODE);
        self.command(cmd::CLEAR);
        self.delay.delay_ms(CLEAR_WAIT_MS);
    }

    fn clear(&mut self) {
        self.command(cmd::CLEAR);
        self.delay.delay_ms(CLEAR_WAIT_MS);
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        let base = if row == 0 {
            cmd::ROW0_ADDR
        } else {
            cmd::ROW1_ADDR
        };
        self.command(base + col);
    }

    fn write_byte(&mut self, byte: u8) {
        self.rs.set_high();
        self.rw.set_low();
        self.write_split(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Delay that returns immediately
    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Mock pin remembering its level and rising edge count
    struct MockPin {
        high: bool,
        rises: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                rises: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.rises += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn display() -> Hd44780<MockPin, NoopDelay> {
        Hd44780::new(
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
            [MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()],
            NoopDelay,
        )
    }

    fn bus_nibble(data: &[MockPin; 4]) -> u8 {
        data.iter()
            .enumerate()
            .fold(0, |acc, (bit, pin)| acc | (u8::from(pin.high) << bit))
    }

    #[test]
    fn command_leaves_low_nibble_on_bus() {
        let mut lcd = display();
        lcd.command(0x28);

        // Command mode: RS low, RW low
        assert!(lcd.rs.is_set_low());
        assert!(lcd.rw.is_set_low());
        // Last nibble transferred is the low one: 0x8
        assert_eq!(bus_nibble(&lcd.data), 0x8);
        // Two enable pulses per byte
        assert_eq!(lcd.en.rises, 2);
    }

    #[test]
    fn data_write_raises_rs() {
        let mut lcd = display();
        lcd.write_byte(b'A'); // 0x41

        assert!(lcd.rs.is_set_high());
        assert_eq!(bus_nibble(&lcd.data), 0x1);
        assert_eq!(lcd.en.rises, 2);
    }

    #[test]
    fn init_sends_full_sequence() {
        let mut lcd = display();
        lcd.init();

        // Five commands, two pulses each
        assert_eq!(lcd.en.rises, 10);
        // Ends on the clear command's low nibble
        assert_eq!(bus_nibble(&lcd.data), 0x1);
    }

    #[test]
    fn cursor_addresses_by_row() {
        let mut lcd = display();

        lcd.set_cursor(0, 4);
        assert_eq!(bus_nibble(&lcd.data), 0x4); // 0x84 low nibble

        lcd.set_cursor(1, 0);
        assert_eq!(bus_nibble(&lcd.data), 0x0); // 0xC0 low nibble
    }

    #[test]
    fn write_bytes_walks_the_string() {
        let mut lcd = display();
        lcd.write_bytes(b"Hi");

        // Two bytes, two pulses each
        assert_eq!(lcd.en.rises, 4);
        // 'i' = 0x69, low nibble 0x9
        assert_eq!(bus_nibble(&lcd.data), 0x9);
    }
}
