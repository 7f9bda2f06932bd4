//! nvd-query - client for the NIST NVD API v2
//!
//! This library validates CVE and CPE searches, turns them into NVD query
//! parameters, and fetches results page by page under the NVD rate limits,
//! merging the pages into a single document.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`nvd`): Query model, wire parameters and result pages
//! - **Application Layer** (`application`): The paging use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, pacer, formatters and presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nvd_query::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let options = ClientOptions::default();
//! let use_case = SearchNvdUseCase::new(
//!     NvdHttpClient::new(&options)?,
//!     ThreadSleepPacer::new(),
//!     StderrProgressReporter::new(),
//!     &options,
//! );
//!
//! let query = CveSearchQuery {
//!     keyword_search: Some("log4j".to_string()),
//!     limit: 4500,
//!     ..CveSearchQuery::default()
//! };
//! let response = use_case.search_cves(&query)?;
//!
//! let output = JsonFormatter::new(true).format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod nvd;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, JsonLinesFormatter};
    pub use crate::adapters::outbound::network::NvdHttpClient;
    pub use crate::adapters::outbound::timing::ThreadSleepPacer;
    pub use crate::application::dto::{ClientOptions, OutputFormat, SearchResponse};
    pub use crate::application::use_cases::SearchNvdUseCase;
    pub use crate::nvd::domain::{
        CpeSearchQuery, CveSearchQuery, MergedResult, PaginatedSearch, ResultPage, SearchTarget,
        WireParameters,
    };
    pub use crate::ports::inbound::NvdSearchPort;
    pub use crate::ports::outbound::{
        HttpResponse, HttpTransport, OutputPresenter, ProgressReporter, RequestPacer,
        ResultFormatter,
    };
    pub use crate::shared::error::NvdError;
    pub use crate::shared::Result;
}
