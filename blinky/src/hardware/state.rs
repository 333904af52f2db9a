use std::fmt::{Display, Formatter};

/// Connection state of a [`Device`](crate::hardware::Device).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

impl Display for ConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "disconnected"),
            ConnectionState::Connected => write!(f, "connected"),
        }
    }
}

/// Last successfully commanded value of a [`Device`](crate::hardware::Device) output.
///
/// This is a cached mirror of the commands sent, not a readback of the hardware: it is `Unknown` until
/// the first successful command of each connection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputState {
    #[default]
    Unknown,
    Off,
    On,
}

impl OutputState {
    pub fn is_on(&self) -> bool {
        matches!(self, OutputState::On)
    }

    pub fn is_off(&self) -> bool {
        matches!(self, OutputState::Off)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, OutputState::Unknown)
    }
}

impl From<bool> for OutputState {
    fn from(value: bool) -> Self {
        match value {
            true => OutputState::On,
            false => OutputState::Off,
        }
    }
}

impl Display for OutputState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputState::Unknown => write!(f, "unknown"),
            OutputState::Off => write!(f, "off"),
            OutputState::On => write!(f, "on"),
        }
    }
}
