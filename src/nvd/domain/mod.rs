pub mod cpe_search;
pub mod cve_search;
pub mod date_range;
pub mod paginated_search;
pub mod result_page;
pub mod search_target;
pub mod severity;
pub mod wire_parameters;

pub use cpe_search::CpeSearchQuery;
pub use cve_search::CveSearchQuery;
pub use date_range::{format_nvd_date, parse_nvd_date, DateRange};
pub use paginated_search::PaginatedSearch;
pub use result_page::{MergedResult, ResultPage};
pub use search_target::SearchTarget;
pub use severity::CvssVersion;
pub use wire_parameters::WireParameters;
