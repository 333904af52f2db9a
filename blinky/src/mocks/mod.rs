//! Mocked transports, links and serial ports (useful for tests mostly).

pub mod link;
pub mod serial_port;
pub mod transport;
