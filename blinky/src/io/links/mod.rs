use std::fmt::{Debug, Display};
use std::time::Duration;

use crate::errors::TransportError;

pub mod serial;

pub use serial::Serial;

/// Defines a byte-level pipe to a device, used by framed transports such as [`Firmata`](crate::io::Firmata).
#[cfg_attr(feature = "serde", typetag::serde(tag = "type"))]
pub trait Link: Debug + Display + Send {
    /// Opens communication (in a blocking way) using the link.
    ///
    /// # Notes
    ///  The method is sync and may block until the connection is established.
    fn open(&mut self) -> Result<(), TransportError>;

    /// Gracefully shuts down the link.
    fn close(&mut self) -> Result<(), TransportError>;

    /// Sets a timeout for read and write operations.
    ///
    /// # Notes
    /// This function is optional and may not be supported by all links.
    fn set_timeout(&mut self, duration: Duration) -> Result<(), TransportError>;

    /// Write bytes to the internal connection. For more details see [`std::io::Write::write_all`].
    ///
    /// # Notes
    /// This function blocks until the write operation is complete.
    fn write(&mut self, buf: &[u8]) -> Result<(), TransportError>;

    /// Reads from the internal connection. For more details see [`std::io::Read::read_exact`].
    ///
    /// # Notes
    /// This function blocks until the buffer is filled or an error occurs.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;
}
