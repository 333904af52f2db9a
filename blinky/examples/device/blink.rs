use anyhow::Result;

use blinky::hardware::Device;
use blinky::io::{DeviceFilter, Firmata};
use blinky::pause_sync;

fn main() -> Result<()> {
    // Firmata board with the demo USB ids, driving the embedded led on pin 13.
    let transport = Firmata::new(DeviceFilter::usb_vid_pid(0xc0de, 0xcafe));
    let mut device = Device::new(transport);
    device.connect()?;
    println!("{}", device);

    device.turn_on()?;
    println!("{}", device);
    pause_sync!(1000);

    device.turn_off()?;
    println!("{}", device);
    pause_sync!(1000);

    Ok(())
}
