//! Defines the transport contract consumed by a [`Device`](crate::hardware::Device).

use std::any::type_name;
use std::fmt::{Debug, Display};

use crate::errors::TransportError;
use crate::io::firmata::Firmata;

/// Defines the trait all transports must implement.
///
/// A transport is the concrete link (bus, socket, radio...) that carries the binary output commands
/// to the physical peripheral. Every call blocks until the underlying operation completes or fails.
#[cfg_attr(feature = "serde", typetag::serde(tag = "type"))]
pub trait Transport: Debug + Display + Send {
    /// Returns the transport name (used for Display only)
    fn get_name(&self) -> &'static str {
        type_name::<Self>().rsplit("::").next().unwrap_or_default()
    }

    /// Opens the communication and performs whatever handshake the peripheral requires.
    ///
    /// # Notes
    /// On failure, the transport may be left half-open: callers are expected to [`Transport::close`] it.
    fn open(&mut self) -> Result<(), TransportError>;

    /// Gracefully shuts down the communication.
    ///
    /// # Notes
    /// Closing an already closed transport must succeed.
    fn close(&mut self) -> Result<(), TransportError>;

    /// Checks if the communication is opened.
    fn is_open(&self) -> bool;

    /// Sends the binary output command: `true` for ON, `false` for OFF.
    fn send_command(&mut self, level: bool) -> Result<(), TransportError>;
}

#[cfg(not(tarpaulin_include))]
impl Default for Box<dyn Transport> {
    fn default() -> Self {
        Box::new(Firmata::default())
    }
}
