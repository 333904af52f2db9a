//! Defines the transports used to reach a device and carry its output commands.

mod filter;
pub mod firmata;
mod links;
mod loopback;
mod transport;

pub use filter::*;
pub use firmata::Firmata;
pub use links::*;
pub use loopback::*;
pub use transport::*;
