use anyhow::Result;

use blinky::hardware::Device;
use blinky::io::Loopback;
use blinky::pause_sync;

// NOTE: no hardware needed: commands are recorded in memory.

fn main() -> Result<()> {
    let loopback = Loopback::default();
    let mut device = Device::new(loopback.clone());
    device.connect()?;

    device.turn_on()?;
    pause_sync!(500);
    device.turn_off()?;
    pause_sync!(500);
    device.toggle()?;

    println!("{}", device);
    println!("Commands sent: {:?}", loopback.get_history());
    Ok(())
}
