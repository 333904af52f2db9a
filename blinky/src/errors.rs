use log::error;
use snafu::Snafu;

pub use crate::errors::Error::*;
use crate::errors::TransportError::IoException;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Device is already connected: disconnect it first
    AlreadyConnected,
    /// Device is not connected: use connect() first
    NotConnected,
    /// Connection failed: {source}.
    ConnectError { source: TransportError },
    /// Command failed: {source}.
    TransportFailure { source: TransportError },
    /// Disconnection failed: {source}.
    DisconnectError { source: TransportError },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    /// {info}
    IoException { info: String },
    /// Transport has not been opened
    NotInitialized,
    /// No device matches the filter {filter}
    DeviceNotFound { filter: String },
    /// Unexpected data received
    UnexpectedData,
    /// Pin {pin} cannot be addressed (0 to 127 only)
    InvalidPin { pin: u8 },
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        error!("std::io error {:?}", error);
        let info = match error.kind() {
            std::io::ErrorKind::NotFound => String::from("Device not found or already in use"),
            std::io::ErrorKind::PermissionDenied => String::from("Device connection lost"),
            _ => error.to_string(),
        };
        IoException { info }
    }
}

impl From<serialport::Error> for TransportError {
    fn from(value: serialport::Error) -> Self {
        std::io::Error::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", AlreadyConnected),
            "Device is already connected: disconnect it first"
        );
        assert_eq!(
            format!("{}", NotConnected),
            "Device is not connected: use connect() first"
        );

        let connect_error = ConnectError {
            source: IoException {
                info: "I/O error message".to_string(),
            },
        };
        assert_eq!(
            format!("{}", connect_error),
            "Connection failed: I/O error message."
        );

        let command_error = TransportFailure {
            source: TransportError::NotInitialized,
        };
        assert_eq!(
            format!("{}", command_error),
            "Command failed: Transport has not been opened."
        );

        let disconnect_error = DisconnectError {
            source: TransportError::UnexpectedData,
        };
        assert_eq!(
            format!("{}", disconnect_error),
            "Disconnection failed: Unexpected data received."
        );
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::DeviceNotFound {
            filter: String::from("UsbVidPid(c0de:cafe)"),
        };
        assert_eq!(
            format!("{}", error),
            "No device matches the filter UsbVidPid(c0de:cafe)"
        );

        let error = TransportError::InvalidPin { pin: 200 };
        assert_eq!(
            format!("{}", error),
            "Pin 200 cannot be addressed (0 to 127 only)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: TransportError = io_error.into();
        assert_eq!(format!("{}", error), "Device not found or already in use");

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: TransportError = io_error.into();
        assert_eq!(format!("{}", error), "Device connection lost");

        let io_error = io::Error::new(io::ErrorKind::Other, "something else");
        let error: TransportError = io_error.into();
        assert_eq!(format!("{}", error), "something else");
    }

    #[test]
    fn test_from_serial_error() {
        let serial_error = serialport::Error {
            kind: serialport::ErrorKind::Io(io::ErrorKind::NotFound),
            description: String::from("IO error"),
        };
        let error: TransportError = serial_error.into();
        assert_eq!(error.to_string(), "Device not found or already in use");

        let serial_error = serialport::Error {
            kind: serialport::ErrorKind::Unknown,
            description: String::from("test error"),
        };
        let error: TransportError = serial_error.into();
        assert_eq!(error.to_string(), "test error");
    }
}
