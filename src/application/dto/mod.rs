/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the query model isolated.
mod client_options;
mod output_format;
mod search_response;

pub use client_options::ClientOptions;
pub use output_format::OutputFormat;
pub use search_response::SearchResponse;
