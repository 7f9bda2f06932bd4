/// Timing adapters for rate limiting
mod thread_sleep_pacer;

pub use thread_sleep_pacer::ThreadSleepPacer;
