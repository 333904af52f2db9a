use std::time::Duration;

use anyhow::Result;
use tokio::task::spawn_blocking;

use blinky::errors::Error;
use blinky::hardware::Device;

/// Runs a blocking device operation off the async workers, handing the device back afterward.
async fn blocking<F>(mut device: Device, operation: F) -> Result<Device>
where
    F: FnOnce(&mut Device) -> Result<(), Error> + Send + 'static,
{
    let device = spawn_blocking(move || operation(&mut device).map(|_| device)).await??;
    Ok(device)
}

// Usage: device_blink_loop [count] [delay_ms]
#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let count: u32 = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(5);
    let delay_ms: u64 = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(500);

    // Firmata over the first serial port available.
    let mut device = blocking(Device::default(), Device::connect).await?;

    for _ in 0..count {
        println!("On");
        device = blocking(device, Device::turn_on).await?;
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        println!("Off");
        device = blocking(device, Device::turn_off).await?;
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    blocking(device, Device::disconnect).await?;
    Ok(())
}
