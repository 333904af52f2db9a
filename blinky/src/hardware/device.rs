use std::fmt::{Display, Formatter};

use log::{debug, error, trace, warn};

use crate::errors::*;
use crate::hardware::{ConnectionState, OutputState};
use crate::io::Transport;

/// Represents a physical device with a single binary output (a LED most-likely) remotely
/// controlled through a [`Transport`].
///
/// The device owns its transport for its whole lifetime: a connected device releases it when
/// [`Device::disconnect`] is called or when it goes out of scope.
///
/// # Example
/// ```no_run
/// use blinky::hardware::Device;
/// use blinky::io::{DeviceFilter, Firmata};
/// use blinky::pause_sync;
///
/// let mut device = Device::new(Firmata::new(DeviceFilter::usb_vid_pid(0xc0de, 0xcafe)));
/// device.connect().expect("device is connected");
/// device.turn_on().expect("led is on");
/// pause_sync!(500);
/// device.turn_off().expect("led is off");
/// ```
#[derive(Debug)]
pub struct Device {
    /// The transport carrying the commands.
    transport: Box<dyn Transport>,
    /// Current connection state.
    connection: ConnectionState,
    /// Last successfully commanded output value.
    output: OutputState,
}

impl Default for Device {
    /// Default implementation for a device.
    ///
    /// This method creates a device using the [`Firmata`](crate::io::Firmata) transport over a
    /// [`Serial`](crate::io::Serial) link: the first available serial port will be used.
    ///
    /// **_/!\ The device will NOT be connected until the [`Device::connect`] method is called._**
    fn default() -> Self {
        Self {
            transport: Default::default(),
            connection: ConnectionState::Disconnected,
            output: OutputState::Unknown,
        }
    }
}

impl Device {
    /// Creates a (disconnected) device using the given transport.
    ///
    /// # Example
    /// ```
    /// use blinky::hardware::Device;
    /// use blinky::io::Loopback;
    ///
    /// let device = Device::new(Loopback::default());
    /// assert!(!device.is_connected());
    /// ```
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Box::new(transport),
            connection: ConnectionState::Disconnected,
            output: OutputState::Unknown,
        }
    }

    /// Opens the transport (and performs its handshake, if any).
    ///
    /// On success, the device is connected and its output state is [`OutputState::Unknown`] until the
    /// first successful command. On failure, the transport is closed again so that nothing is left
    /// half-open and the device remains disconnected: calling this method again retries from scratch.
    ///
    /// # Errors
    /// * `AlreadyConnected`: the device is already connected (nothing is changed).
    /// * `ConnectError`: the transport failed to open.
    pub fn connect(&mut self) -> Result<(), Error> {
        if self.connection.is_connected() {
            return Err(AlreadyConnected);
        }

        if let Err(source) = self.transport.open() {
            if let Err(close_error) = self.transport.close() {
                warn!("{}: release after failed connection: {}", self, close_error);
            }
            debug!("{}: connection failed: {}", self, source);
            return Err(ConnectError { source });
        }

        self.connection = ConnectionState::Connected;
        self.output = OutputState::Unknown;
        debug!("{} is connected", self);
        Ok(())
    }

    /// Closes the transport.
    ///
    /// The device is considered disconnected (and its output state unknown) whatever the outcome.
    ///
    /// # Errors
    /// * `NotConnected`: the device is not connected.
    /// * `DisconnectError`: the transport reported a failure while closing.
    pub fn disconnect(&mut self) -> Result<(), Error> {
        if !self.connection.is_connected() {
            return Err(NotConnected);
        }

        self.connection = ConnectionState::Disconnected;
        self.output = OutputState::Unknown;
        self.transport
            .close()
            .map_err(|source| DisconnectError { source })?;
        debug!("{} is disconnected", self);
        Ok(())
    }

    /// Commands the output: `true` for ON, `false` for OFF.
    ///
    /// The output state is only updated once the transport confirmed the command. No retry is made.
    ///
    /// # Errors
    /// * `NotConnected`: the device is not connected.
    /// * `TransportFailure`: the transport failed to send the command (output state is unchanged).
    pub fn set_output(&mut self, on: bool) -> Result<(), Error> {
        if !self.connection.is_connected() {
            return Err(NotConnected);
        }

        self.transport
            .send_command(on)
            .map_err(|source| TransportFailure { source })?;
        self.output = OutputState::from(on);
        trace!("{}", self);
        Ok(())
    }

    /// Turns the output ON.
    pub fn turn_on(&mut self) -> Result<(), Error> {
        self.set_output(true)
    }

    /// Turns the output OFF.
    pub fn turn_off(&mut self) -> Result<(), Error> {
        self.set_output(false)
    }

    /// Toggles the output: turned off if currently on, turned on otherwise (including when unknown).
    pub fn toggle(&mut self) -> Result<(), Error> {
        self.set_output(!self.output.is_on())
    }

    // ########################################
    // Setters and Getters.

    /// Retrieves the connection state.
    pub fn get_connection_state(&self) -> ConnectionState {
        self.connection
    }

    /// Indicates if the device is connected.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Retrieves the last successfully commanded output value.
    pub fn get_output_state(&self) -> OutputState {
        self.output
    }

    /// Retrieves the transport used.
    pub fn get_transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Device ({}) [connection={}, output={}]",
            self.transport, self.connection, self.output
        )
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        if self.connection.is_connected() {
            self.connection = ConnectionState::Disconnected;
            if let Err(error) = self.transport.close() {
                error!("{}: release on drop: {}", self, error);
            }
        }
    }
}
