use std::time::Duration;

/// RequestPacer port for the wall-clock gap the NVD rate limit requires
///
/// Called once after every completed request.
pub trait RequestPacer {
    fn pause(&self, delay: Duration);
}

impl<P: RequestPacer + ?Sized> RequestPacer for &P {
    fn pause(&self, delay: Duration) {
        (**self).pause(delay)
    }
}
