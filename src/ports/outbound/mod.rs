/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, clock, console, output).
pub mod formatter;
pub mod http_transport;
pub mod output_presenter;
pub mod progress_reporter;
pub mod request_pacer;

pub use formatter::ResultFormatter;
pub use http_transport::{HttpResponse, HttpTransport};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use request_pacer::RequestPacer;
