/// Blocks the current thread for `$ms` milliseconds.
///
/// The [`Device`](crate::hardware::Device) never waits by itself: timing between two commands is the
/// caller's concern and this macro is the simplest way to handle it in synchronous code.
///
/// # Example
/// ```
/// use blinky::pause_sync;
///
/// pause_sync!(10);
/// ```
#[macro_export]
macro_rules! pause_sync {
    ($ms:expr) => {
        std::thread::sleep(std::time::Duration::from_millis($ms as u64))
    };
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    #[test]
    fn test_pause_sync() {
        let start = Instant::now();
        pause_sync!(50);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
