//! Official Firmata documentation: https://github.com/firmata/protocol
//! Helper unofficial documentation: https://github.com/martin-eden/firmata_protocol/blob/main/protocol.md

pub(crate) mod constants;

use std::fmt::{Display, Formatter};
use std::time::Duration;

use log::{debug, trace, warn};

use crate::errors::TransportError;
use crate::errors::TransportError::{InvalidPin, NotInitialized, UnexpectedData};
use crate::io::firmata::constants::*;
use crate::io::{DeviceFilter, Link, Serial, Transport};

/// Implements the [Firmata protocol](https://github.com/firmata/protocol) within a [`Transport`]:
/// drives a single digital pin of a board running a StandardFirmata sketch.
///
/// # Example
/// ```no_run
/// use blinky::hardware::Device;
/// use blinky::io::{DeviceFilter, Firmata};
///
/// let transport = Firmata::new(DeviceFilter::port("/dev/ttyACM0")).with_pin(12);
/// let mut device = Device::new(transport);
/// device.connect().expect("board is connected");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct Firmata {
    /// Link used to communicate with the board.
    link: Box<dyn Link>,
    /// The driven digital pin.
    pin: u8,

    // ########################################
    // # Volatile utility data.
    #[cfg_attr(feature = "serde", serde(skip))]
    connected: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    protocol_version: Option<String>,
}

impl Default for Firmata {
    /// Firmata over a [`Serial`] link on the first available port, driving the on-board LED.
    fn default() -> Self {
        Self::from(Serial::default())
    }
}

impl Firmata {
    /// Creates a Firmata transport over a [`Serial`] link opening the port matching `filter`.
    pub fn new(filter: DeviceFilter) -> Self {
        Self::from(Serial::new(filter))
    }

    /// Selects the driven digital pin (0 to 127, default: 13).
    ///
    /// # Notes
    /// The pin is checked when the transport opens: an out of range pin fails with
    /// [`TransportError::InvalidPin`].
    pub fn with_pin(mut self, pin: u8) -> Self {
        self.pin = pin;
        self
    }

    /// Retrieves the driven digital pin.
    pub fn get_pin(&self) -> u8 {
        self.pin
    }

    /// Retrieves the protocol version reported by the board during the handshake.
    pub fn get_protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Starts a conversation with the board: resets it, waits for its version then prepares the pin.
    fn handshake(&mut self) -> Result<(), TransportError> {
        // Some boards do not restart automatically when the connexion is opened: a software reset
        // clears settings left over by a previous program.
        self.link.write(&[SYSTEM_RESET])?;

        self.link.write(&[REPORT_VERSION])?;
        self.protocol_version = Some(self.read_version()?);

        self.link.set_timeout(Duration::from_millis(500))?;

        self.link.write(&[SET_PIN_MODE, self.pin, PIN_MODE_OUTPUT])
    }

    /// Handle a REPORT_VERSION response (0xF9 - return the protocol version).
    /// <https://github.com/firmata/protocol/blob/master/protocol.md#message-types>
    fn read_version(&mut self) -> Result<String, TransportError> {
        let mut byte = [0; 1];
        for _ in 0..HANDSHAKE_MAX_BYTES {
            self.link.read_exact(&mut byte)?;
            if byte[0] == REPORT_VERSION {
                let mut version = [0; 2];
                self.link.read_exact(&mut version)?;
                return Ok(format!("{}.{}", version[0], version[1]));
            }
            trace!("Firmata: skip unexpected byte {:02X?}", byte[0]);
        }
        Err(UnexpectedData)
    }
}

impl<L: Link + 'static> From<L> for Firmata {
    fn from(link: L) -> Self {
        Self {
            link: Box::new(link),
            pin: DEFAULT_LED_PIN,
            connected: false,
            protocol_version: None,
        }
    }
}

impl Display for Firmata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Firmata({}, pin={})", self.link, self.pin)
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Transport for Firmata {
    fn open(&mut self) -> Result<(), TransportError> {
        self.connected = false;
        self.protocol_version = None;

        // Data bytes are 7-bit: a higher pin would be read by the board as a command.
        if self.pin > MAX_DATA_BYTE {
            return Err(InvalidPin { pin: self.pin });
        }

        self.link.open()?;
        if let Err(error) = self.handshake() {
            if let Err(close_error) = self.link.close() {
                warn!("{}: failed to close after handshake failure: {}", self, close_error);
            }
            return Err(error);
        }

        self.connected = true;
        debug!(
            "{} is ready (protocol {})",
            self,
            self.get_protocol_version().unwrap_or_default()
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.connected = false;
        self.protocol_version = None;
        self.link.close()
    }

    fn is_open(&self) -> bool {
        self.connected
    }

    /// Send a SET_DIGITAL_PIN_VALUE message (0xF5 - set value of an individual digital pin).
    fn send_command(&mut self, level: bool) -> Result<(), TransportError> {
        if !self.connected {
            return Err(NotInitialized);
        }
        let payload = &[SET_DIGITAL_PIN_VALUE, self.pin, u8::from(level)];
        trace!("Digital write: {:02X?}", payload);
        self.link.write(payload)
    }
}
