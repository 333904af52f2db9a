use std::fmt::{Debug, Display, Formatter};
use std::io::{Read, Write};
use std::time::Duration;

use log::trace;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::errors::TransportError;
use crate::errors::TransportError::NotInitialized;
use crate::io::{DeviceFilter, Link};

/// Default baud rate (StandardFirmata sketches run at 57600 bauds).
pub const DEFAULT_BAUD_RATE: u32 = 57_600;
/// Default read/write timeout while the connection is being established.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A serial port [`Link`]: the port is selected when opened using a [`DeviceFilter`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial {
    /// The filter used to find the port.
    filter: DeviceFilter,
    /// The baud rate.
    baud_rate: u32,
    /// Read/write timeout.
    timeout: Duration,
    /// A Read/Write io object.
    #[cfg_attr(feature = "serde", serde(skip))]
    io: Option<Box<dyn SerialPort>>,
}

impl Serial {
    /// Constructs a new `Serial` link opening the first port matching the `filter`.
    ///
    /// # Example
    /// ```
    /// use blinky::io::{DeviceFilter, Serial};
    ///
    /// let serial = Serial::new(DeviceFilter::usb_vid_pid(0xc0de, 0xcafe));
    /// let serial = Serial::new(DeviceFilter::port("/dev/ttyACM0")).with_baud_rate(115_200);
    /// ```
    pub fn new(filter: DeviceFilter) -> Self {
        Self {
            filter,
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
            io: None,
        }
    }

    /// Sets the baud rate used when opening the port.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Sets the read/write timeout used when opening the port.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retrieves the configured filter.
    pub fn get_filter(&self) -> &DeviceFilter {
        &self.filter
    }

    /// Retrieves the configured baud rate.
    pub fn get_baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Checks if the port is currently opened.
    pub fn is_open(&self) -> bool {
        self.io.is_some()
    }
}

impl Default for Serial {
    /// Creates a new serial link on the first available port.
    ///
    /// # Notes
    /// The port is only looked up during the open phase: if none is available, opening fails.
    fn default() -> Self {
        Self::new(DeviceFilter::Any)
    }
}

impl Debug for Serial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serial")
            .field("filter", &self.filter)
            .field("baud_rate", &self.baud_rate)
            .field("timeout", &self.timeout)
            .field("open", &self.is_open())
            .finish()
    }
}

impl Display for Serial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Serial({})", self.filter)
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Link for Serial {
    fn open(&mut self) -> Result<(), TransportError> {
        let port = self.filter.resolve()?;
        let connexion = serialport::new(port, self.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(self.timeout)
            .open()?;
        trace!("Serial port is now opened: {:?}", connexion.name());
        self.io = Some(connexion);
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        if self.io.take().is_some() {
            trace!("Serial port is now closed");
        }
        Ok(())
    }

    fn set_timeout(&mut self, duration: Duration) -> Result<(), TransportError> {
        self.io
            .as_mut()
            .ok_or(NotInitialized)?
            .set_timeout(duration)?;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), TransportError> {
        self.io.as_mut().ok_or(NotInitialized)?.write_all(buf)?;
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        self.io.as_mut().ok_or(NotInitialized)?.read_exact(buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serialport::ErrorKind;

    use super::*;
    use crate::mocks::serial_port::SerialPortMock;

    fn get_test_successful_link() -> Serial {
        let mut link = Serial::new(DeviceFilter::port("/dev/ttyACM0"));
        link.io = Some(Box::new(SerialPortMock::default()));
        link
    }

    fn get_test_failing_link() -> Serial {
        let mut link = Serial::new(DeviceFilter::port("/dev/ttyACM0"));
        link.io = Some(Box::new(SerialPortMock::new(ErrorKind::InvalidInput)));
        link
    }

    #[test]
    fn test_new_serial_link() {
        let link = Serial::new(DeviceFilter::port("/dev/ttyACM0"));
        assert_eq!(link.get_filter(), &DeviceFilter::port("/dev/ttyACM0"));
        assert_eq!(link.get_baud_rate(), DEFAULT_BAUD_RATE);
        assert_eq!(link.timeout, DEFAULT_TIMEOUT);
        assert!(!link.is_open());

        let link = Serial::default()
            .with_baud_rate(115_200)
            .with_timeout(Duration::from_secs(1));
        assert_eq!(link.get_filter(), &DeviceFilter::Any);
        assert_eq!(link.get_baud_rate(), 115_200);
        assert_eq!(link.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_open_missing_port() {
        let mut link = Serial::new(DeviceFilter::port("/dev/blinky-does-not-exist"));
        assert!(link.open().is_err());
        assert!(!link.is_open());
    }

    #[test]
    fn test_close_serial_link() {
        let mut link = get_test_successful_link();
        assert!(link.is_open());
        assert!(link.close().is_ok());
        assert!(!link.is_open());
        // Closing twice is harmless.
        assert!(link.close().is_ok());
    }

    #[test]
    fn test_not_initialized() {
        let mut link = Serial::default();
        let mut buf = [0; 3];
        assert!(matches!(link.write(&[1, 2, 3]), Err(NotInitialized)));
        assert!(matches!(link.read_exact(&mut buf), Err(NotInitialized)));
        assert!(matches!(
            link.set_timeout(Duration::from_millis(500)),
            Err(NotInitialized)
        ));
    }

    #[test]
    fn test_write_data() {
        let mut link = get_test_successful_link();
        assert!(link.write(&[1, 2, 3]).is_ok());
        assert!(link.set_timeout(Duration::from_millis(500)).is_ok());

        let mut link = get_test_failing_link();
        assert!(link.write(&[1, 2, 3]).is_err());
        assert!(link.set_timeout(Duration::from_millis(500)).is_err());
    }

    #[test]
    fn test_read_exact() {
        let mut link = get_test_successful_link();
        let mut buf = [0; 3];
        assert!(link.read_exact(&mut buf).is_ok());

        let mut link = get_test_failing_link();
        let mut buf = [0; 3];
        assert!(link.read_exact(&mut buf).is_err());
    }

    #[test]
    fn test_display_serial_link() {
        let link = Serial::new(DeviceFilter::port("/dev/ttyACM0"));
        assert_eq!(format!("{}", link), "Serial(Port(/dev/ttyACM0))");
        let link = Serial::new(DeviceFilter::usb_vid_pid(0xc0de, 0xcafe));
        assert_eq!(format!("{}", link), "Serial(UsbVidPid(c0de:cafe))");
    }
}
