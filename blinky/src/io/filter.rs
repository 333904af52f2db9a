use std::fmt::{Display, Formatter};

use log::trace;
use serialport::{SerialPortInfo, SerialPortType};

use crate::errors::TransportError;

/// Selects which attached device a [`Serial`](crate::io::Serial) link opens.
///
/// # Example
/// ```
/// use blinky::io::DeviceFilter;
///
/// let filter = DeviceFilter::usb_vid_pid(0xc0de, 0xcafe);
/// let filter = DeviceFilter::port("/dev/ttyACM0");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeviceFilter {
    /// The first available serial port, whatever is attached to it.
    #[default]
    Any,
    /// An explicit port path (`/dev/ttyACM0`, `COM4`, etc.): used as is, without enumeration.
    Port { path: String },
    /// A USB device with the given vendor and product ids.
    UsbVidPid { vid: u16, pid: u16 },
    /// A USB device with the given vendor and product ids and serial number.
    UsbVidPidAndSerial { vid: u16, pid: u16, serial: String },
    /// A USB device matching every given criterion.
    /// Manufacturer and product are case-insensitive substring checks.
    UsbFlexible {
        vid: Option<u16>,
        pid: Option<u16>,
        manufacturer_contains: Option<String>,
        product_contains: Option<String>,
    },
    /// A USB device with the given serial number.
    Serial { serial: String },
}

impl DeviceFilter {
    /// Creates a filter for the given explicit port path.
    pub fn port<P: Into<String>>(path: P) -> Self {
        Self::Port { path: path.into() }
    }

    /// Creates a filter matching a USB device by vendor and product ids.
    pub fn usb_vid_pid(vid: u16, pid: u16) -> Self {
        Self::UsbVidPid { vid, pid }
    }

    /// Creates a filter matching a USB device by serial number only.
    pub fn serial<S: Into<String>>(serial: S) -> Self {
        Self::Serial {
            serial: serial.into(),
        }
    }

    /// Checks if the given port matches this filter.
    pub fn matches(&self, info: &SerialPortInfo) -> bool {
        let usb = match &info.port_type {
            SerialPortType::UsbPort(usb) => Some(usb),
            _ => None,
        };
        match self {
            DeviceFilter::Any => true,
            DeviceFilter::Port { path } => info.port_name == *path,
            DeviceFilter::UsbVidPid { vid, pid } => {
                usb.is_some_and(|usb| usb.vid == *vid && usb.pid == *pid)
            }
            DeviceFilter::UsbVidPidAndSerial { vid, pid, serial } => usb.is_some_and(|usb| {
                usb.vid == *vid
                    && usb.pid == *pid
                    && usb.serial_number.as_deref() == Some(serial.as_str())
            }),
            DeviceFilter::Serial { serial } => {
                usb.is_some_and(|usb| usb.serial_number.as_deref() == Some(serial.as_str()))
            }
            DeviceFilter::UsbFlexible {
                vid,
                pid,
                manufacturer_contains,
                product_contains,
            } => usb.is_some_and(|usb| {
                vid.map_or(true, |vid| usb.vid == vid)
                    && pid.map_or(true, |pid| usb.pid == pid)
                    && contains(&usb.manufacturer, manufacturer_contains)
                    && contains(&usb.product, product_contains)
            }),
        }
    }

    /// Returns the name of the first port matching this filter among the given ones.
    ///
    /// # Errors
    /// * `DeviceNotFound`: no port matches.
    pub fn select(&self, ports: &[SerialPortInfo]) -> Result<String, TransportError> {
        ports
            .iter()
            .find(|info| self.matches(info))
            .map(|info| info.port_name.clone())
            .ok_or_else(|| TransportError::DeviceNotFound {
                filter: self.to_string(),
            })
    }

    /// Resolves this filter into a port name among the currently available ports.
    ///
    /// A [`DeviceFilter::Port`] filter is returned as is, any other one requires port enumeration.
    pub fn resolve(&self) -> Result<String, TransportError> {
        if let DeviceFilter::Port { path } = self {
            return Ok(path.clone());
        }
        let ports = serialport::available_ports()?;
        trace!("Available ports: {:?}", ports);
        self.select(&ports)
    }
}

/// Case-insensitive substring check: a missing criterion always matches, a missing value never does.
fn contains(value: &Option<String>, criterion: &Option<String>) -> bool {
    match (value, criterion) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(value), Some(criterion)) => value
            .to_lowercase()
            .contains(&criterion.to_lowercase()),
    }
}

impl Display for DeviceFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceFilter::Any => write!(f, "Any"),
            DeviceFilter::Port { path } => write!(f, "Port({})", path),
            DeviceFilter::UsbVidPid { vid, pid } => write!(f, "UsbVidPid({:04x}:{:04x})", vid, pid),
            DeviceFilter::UsbVidPidAndSerial { vid, pid, serial } => {
                write!(f, "UsbVidPidAndSerial({:04x}:{:04x}, {})", vid, pid, serial)
            }
            DeviceFilter::UsbFlexible { .. } => write!(f, "{:?}", self),
            DeviceFilter::Serial { serial } => write!(f, "Serial({})", serial),
        }
    }
}
