//! Defines the pieces of hardware that can be remotely controlled through a [`Transport`](crate::io::Transport).

mod device;
mod state;

pub use device::Device;
pub use state::{ConnectionState, OutputState};
