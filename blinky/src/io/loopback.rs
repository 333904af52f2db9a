use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

use crate::errors::TransportError;
use crate::errors::TransportError::NotInitialized;
use crate::io::Transport;

/// Inner data shared by all clones of a [`Loopback`].
#[derive(Debug, Default)]
struct LoopbackData {
    opened: bool,
    history: Vec<bool>,
}

/// In-memory [`Transport`]: every command is recorded instead of being sent to a peripheral.
///
/// Clones share the same history, which makes it possible to keep an eye on a transport after it
/// has been moved into a [`Device`](crate::hardware::Device).
///
/// # Example
/// ```
/// use blinky::hardware::Device;
/// use blinky::io::Loopback;
///
/// let loopback = Loopback::default();
/// let mut device = Device::new(loopback.clone());
/// device.connect().unwrap();
/// device.turn_on().unwrap();
/// device.turn_off().unwrap();
/// assert_eq!(loopback.get_history(), vec![true, false]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Loopback {
    #[cfg_attr(feature = "serde", serde(skip))]
    data: Arc<RwLock<LoopbackData>>,
}

impl Loopback {
    /// Returns every level sent since the creation of the transport.
    pub fn get_history(&self) -> Vec<bool> {
        self.data.read().history.clone()
    }

    /// Returns the last level sent, if any.
    pub fn get_level(&self) -> Option<bool> {
        self.data.read().history.last().copied()
    }
}

impl Display for Loopback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loopback")
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Transport for Loopback {
    fn open(&mut self) -> Result<(), TransportError> {
        self.data.write().opened = true;
        trace!("Loopback is now opened");
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.data.write().opened = false;
        trace!("Loopback is now closed");
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.data.read().opened
    }

    fn send_command(&mut self, level: bool) -> Result<(), TransportError> {
        let mut data = self.data.write();
        if !data.opened {
            return Err(NotInitialized);
        }
        trace!("Loopback command: {}", level);
        data.history.push(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_records_commands() {
        let loopback = Loopback::default();
        let mut transport = loopback.clone();
        assert!(!loopback.is_open());
        assert!(loopback.get_level().is_none());

        assert!(matches!(transport.send_command(true), Err(NotInitialized)));
        assert!(loopback.get_history().is_empty());

        transport.open().unwrap();
        assert!(loopback.is_open());
        transport.send_command(true).unwrap();
        transport.send_command(false).unwrap();
        transport.send_command(true).unwrap();
        assert_eq!(loopback.get_history(), vec![true, false, true]);
        assert_eq!(loopback.get_level(), Some(true));

        transport.close().unwrap();
        assert!(!loopback.is_open());
        // History survives a close.
        assert_eq!(loopback.get_history().len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Loopback::default()), "Loopback");
    }
}
