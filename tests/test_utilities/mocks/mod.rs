/// Mock implementations for testing
mod mock_nvd_transport;
mod mock_progress_reporter;
mod mock_request_pacer;

pub use mock_nvd_transport::{cpe_page, cve_page, MockNvdTransport};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_request_pacer::MockRequestPacer;
