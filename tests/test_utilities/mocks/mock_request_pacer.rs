use nvd_query::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock RequestPacer that records each requested pause instead of sleeping
#[derive(Default, Clone)]
pub struct MockRequestPacer {
    pub pauses: Arc<Mutex<Vec<Duration>>>,
}

impl MockRequestPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.lock().unwrap().len()
    }

    pub fn get_pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl RequestPacer for MockRequestPacer {
    fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}
