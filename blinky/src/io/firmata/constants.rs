//! Firmata protocol constants (the subset used to drive a digital output).
//! <https://github.com/firmata/protocol/blob/master/protocol.md#message-types>

/// Set a pin to INPUT/OUTPUT/PWM/etc
pub const SET_PIN_MODE: u8 = 0xF4;
/// Set value of an individual digital pin
pub const SET_DIGITAL_PIN_VALUE: u8 = 0xF5;
/// Report protocol version
pub const REPORT_VERSION: u8 = 0xF9;
/// Reset from MIDI
pub const SYSTEM_RESET: u8 = 0xFF;

/// Pin mode: digital output.
pub const PIN_MODE_OUTPUT: u8 = 0x01;

/// Highest value a Firmata data byte can carry (7 bits).
pub const MAX_DATA_BYTE: u8 = 0x7F;

/// The pin driving the on-board LED on most Arduino boards.
pub const DEFAULT_LED_PIN: u8 = 13;

/// Maximum number of bytes skipped while waiting for the version report.
pub const HANDSHAKE_MAX_BYTES: usize = 256;
