use std::fmt::{Display, Formatter};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::TransportError;
use crate::errors::TransportError::{IoException, NotInitialized};
use crate::io::Transport;

/// Inner (shared) state of a [`MockTransport`].
#[derive(Debug, Default)]
pub struct MockTransportData {
    pub opened: bool,
    /// Number of upcoming `open()` calls that fail (leaving the transport half-open).
    pub open_failures: usize,
    pub fail_send: bool,
    pub fail_close: bool,
    pub open_calls: usize,
    pub close_calls: usize,
    /// Every command successfully sent.
    pub sent: Vec<bool>,
}

/// Mock implementation of [`Transport`] with failure injection: clones share the same [`MockTransportData`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub data: Arc<RwLock<MockTransportData>>,
}

impl MockTransport {
    /// Creates a transport whose `count` next `open()` calls fail.
    pub fn failing_open(count: usize) -> Self {
        let transport = Self::default();
        transport.data.write().open_failures = count;
        transport
    }

    /// Returns a copy of every command successfully sent.
    pub fn sent(&self) -> Vec<bool> {
        self.data.read().sent.clone()
    }
}

impl Display for MockTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockTransport")
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Transport for MockTransport {
    fn open(&mut self) -> Result<(), TransportError> {
        let mut data = self.data.write();
        data.open_calls += 1;
        data.opened = true;
        if data.open_failures > 0 {
            data.open_failures -= 1;
            return Err(IoException {
                info: String::from("Mock handshake failure"),
            });
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        let mut data = self.data.write();
        data.close_calls += 1;
        data.opened = false;
        match data.fail_close {
            true => Err(IoException {
                info: String::from("Mock close failure"),
            }),
            false => Ok(()),
        }
    }

    fn is_open(&self) -> bool {
        self.data.read().opened
    }

    fn send_command(&mut self, level: bool) -> Result<(), TransportError> {
        let mut data = self.data.write();
        if !data.opened {
            return Err(NotInitialized);
        }
        if data.fail_send {
            return Err(IoException {
                info: String::from("Mock send failure"),
            });
        }
        data.sent.push(level);
        Ok(())
    }
}
