use crate::ports::outbound::RequestPacer;
use std::time::Duration;

/// ThreadSleepPacer adapter - blocks the calling thread for the full delay
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacer;

impl ThreadSleepPacer {
    pub fn new() -> Self {
        Self
    }
}

impl RequestPacer for ThreadSleepPacer {
    fn pause(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
