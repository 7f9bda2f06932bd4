/// Network adapters for external API calls
mod nvd_http_client;

pub use nvd_http_client::NvdHttpClient;
