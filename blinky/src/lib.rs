#![doc(html_root_url = "https://docs.rs/blinky/0.1.0")]

//! <h1 align="center">BLINKY</h1>
//! <div style="text-align:center;font-style:italic;">Connect to a device and drive its LED output.</div>
//!
//! # Features
//!
//! **Blinky** is a small Rust library to "remotely" control the binary output (typically a LED) of a
//! device attached to your computer.
//!
//! - Define a remotely controllable [`Device`](hardware::Device)
//! - Reach it through a [`Transport`](io::Transport): [`Firmata`](io::Firmata) over a [`Serial`](io::Serial)
//!   link, or an in-memory [`Loopback`](io::Loopback)
//! - Select the serial port to use with a [`DeviceFilter`](io::DeviceFilter) (USB vid/pid, serial number, path...)
//!
//! Every operation is synchronous: it blocks until the transport confirmed it (or failed).
//! Timing between two commands is entirely up to you.
//!
//! # Prerequisites
//!
//! To use the [`Firmata`](io::Firmata) transport, [StandardFirmata.ino](https://github.com/firmata/arduino/blob/main/examples/StandardFirmata/StandardFirmata.ino)
//! **MUST** be installed on the board.
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! blinky = "0.1.0"
//! ```
//!
//! - The following code connects to the first available board and blinks its embedded led once.
//! ```no_run
//! use blinky::hardware::Device;
//! use blinky::pause_sync;
//!
//! fn main() -> Result<(), blinky::errors::Error> {
//!     // Firmata over the first serial port available, driving pin 13.
//!     let mut device = Device::default();
//!     device.connect()?;
//!
//!     device.turn_on()?;
//!     pause_sync!(1000);
//!     device.turn_off()?;
//!
//!     // The connection is released when the device goes out of scope.
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//!
//! - **libudev** -- (enabled by default) Activates `serialport` crate _libudev_ feature under-the-hood (required on Linux only for port listing).
//! - **serde** -- Enables serialize/deserialize capabilities for transports, links and filters.
//! - **mocks** -- Provides mocked transports and links (useful for tests mostly).

pub mod errors;
pub mod hardware;
pub mod io;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod utils;
