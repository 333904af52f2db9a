use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::errors::TransportError;
use crate::errors::TransportError::{IoException, NotInitialized};
use crate::io::Link;

/// Inner (shared) state of a [`MockLink`].
#[derive(Debug, Default)]
pub struct MockLinkData {
    pub opened: bool,
    /// Makes the next `open()` calls fail.
    pub fail_open: bool,
    /// Makes the next `write()` calls fail.
    pub fail_write: bool,
    /// Bytes served by `read_exact()`.
    pub read_buf: VecDeque<u8>,
    /// Every byte written so far.
    pub written: Vec<u8>,
    pub timeout: Option<Duration>,
    pub open_calls: usize,
    pub close_calls: usize,
}

/// Scripted byte pipe implementing [`Link`]: clones share the same [`MockLinkData`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct MockLink {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub data: Arc<RwLock<MockLinkData>>,
}

impl MockLink {
    /// Creates a link that will serve the given bytes to readers.
    pub fn with_responses(bytes: &[u8]) -> Self {
        let link = Self::default();
        link.data.write().read_buf.extend(bytes);
        link
    }

    /// Creates a link answering the Firmata version query (protocol 2.5).
    pub fn firmata_board() -> Self {
        Self::with_responses(&[0xF9, 0x02, 0x05])
    }

    /// Returns a copy of every byte written so far.
    pub fn written(&self) -> Vec<u8> {
        self.data.read().written.clone()
    }
}

impl Display for MockLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockLink")
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Link for MockLink {
    fn open(&mut self) -> Result<(), TransportError> {
        let mut data = self.data.write();
        data.open_calls += 1;
        if data.fail_open {
            return Err(IoException {
                info: String::from("Mock open failure"),
            });
        }
        data.opened = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        let mut data = self.data.write();
        data.close_calls += 1;
        data.opened = false;
        Ok(())
    }

    fn set_timeout(&mut self, duration: Duration) -> Result<(), TransportError> {
        self.data.write().timeout = Some(duration);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), TransportError> {
        let mut data = self.data.write();
        if !data.opened {
            return Err(NotInitialized);
        }
        if data.fail_write {
            return Err(IoException {
                info: String::from("Mock write failure"),
            });
        }
        data.written.extend_from_slice(buf);
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        let mut data = self.data.write();
        if !data.opened {
            return Err(NotInitialized);
        }
        if data.read_buf.len() < buf.len() {
            data.read_buf.clear();
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        for byte in buf.iter_mut() {
            *byte = data.read_buf.pop_front().unwrap_or_default();
        }
        Ok(())
    }
}
