use blinky::errors::Error;
use blinky::hardware::{ConnectionState, Device, OutputState};
use blinky::io::{DeviceFilter, Firmata, Loopback, Transport};

#[test]
fn test_blink_sequence() {
    let loopback = Loopback::default();
    let mut device = Device::new(loopback.clone());

    device.connect().unwrap();
    assert_eq!(device.get_output_state(), OutputState::Unknown);

    for _ in 0..3 {
        device.turn_on().unwrap();
        assert_eq!(device.get_output_state(), OutputState::On);
        blinky::pause_sync!(5);
        device.turn_off().unwrap();
        assert_eq!(device.get_output_state(), OutputState::Off);
    }
    assert_eq!(
        loopback.get_history(),
        vec![true, false, true, false, true, false]
    );
    assert_eq!(loopback.get_level(), Some(false));
}

#[test]
fn test_command_requires_connection() {
    let loopback = Loopback::default();
    let mut device = Device::new(loopback.clone());

    assert!(matches!(device.turn_on(), Err(Error::NotConnected)));
    assert_eq!(device.get_connection_state(), ConnectionState::Disconnected);
    assert!(loopback.get_history().is_empty());
}

#[test]
fn test_connection_lifecycle() {
    let loopback = Loopback::default();
    let mut device = Device::new(loopback.clone());

    device.connect().unwrap();
    assert!(loopback.is_open());
    assert!(matches!(device.connect(), Err(Error::AlreadyConnected)));

    device.disconnect().unwrap();
    assert!(!loopback.is_open());
    assert!(matches!(device.disconnect(), Err(Error::NotConnected)));

    device.connect().unwrap();
    drop(device);
    assert!(!loopback.is_open());
}

#[test]
fn test_connect_to_missing_board() {
    let transport = Firmata::new(DeviceFilter::port("/dev/blinky-does-not-exist"));
    let mut device = Device::new(transport);

    let result = device.connect();
    assert!(matches!(result, Err(Error::ConnectError { .. })));
    assert!(!device.is_connected());

    // Retrying is allowed (and fails the same way).
    assert!(matches!(device.connect(), Err(Error::ConnectError { .. })));
    assert!(matches!(device.turn_on(), Err(Error::NotConnected)));
}
