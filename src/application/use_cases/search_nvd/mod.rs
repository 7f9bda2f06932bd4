use crate::application::dto::{ClientOptions, SearchResponse};
use crate::nvd::domain::{
    CpeSearchQuery, CveSearchQuery, MergedResult, PaginatedSearch, ResultPage, SearchTarget,
    WireParameters,
};
use crate::ports::inbound::NvdSearchPort;
use crate::ports::outbound::{HttpTransport, ProgressReporter, RequestPacer};
use crate::shared::error::NvdError;
use crate::shared::Result;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Largest page the NVD API serves in one response
const MAX_PAGE_SIZE: u64 = 2000;

/// SearchNvdUseCase - runs typed searches against the NVD API
///
/// Turns a validated query into one or more strictly sequential page
/// requests, pausing for the configured delay after each successful one, and
/// merges the pages' list fields into a single document.
///
/// # Type Parameters
/// * `T` - HttpTransport implementation
/// * `P` - RequestPacer implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchNvdUseCase<T, P, PR> {
    transport: T,
    pacer: P,
    progress_reporter: PR,
    api_key: Option<String>,
    delay: Duration,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<T, P, PR> SearchNvdUseCase<T, P, PR>
where
    T: HttpTransport,
    P: RequestPacer,
    PR: ProgressReporter,
{
    /// Creates a new SearchNvdUseCase with injected dependencies
    pub fn new(transport: T, pacer: P, progress_reporter: PR, options: &ClientOptions) -> Self {
        Self {
            transport,
            pacer,
            progress_reporter,
            api_key: options.api_key.clone(),
            delay: options.delay,
            cancel_flag: None,
        }
    }

    /// Aborts the search before the next page request once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Validates, serializes and runs any paginated search
    pub fn execute<Q: PaginatedSearch>(&self, query: &Q) -> Result<SearchResponse> {
        query.validate()?;
        let params = query.to_params()?;
        let target = query.target();

        let merged = self.fetch_paged(target, params, query.limit())?;
        Ok(SearchResponse::new(target, merged))
    }

    /// Fetches enough pages to cover `limit` records (0 = one default page)
    fn fetch_paged(
        &self,
        target: SearchTarget,
        mut params: WireParameters,
        limit: u64,
    ) -> Result<MergedResult> {
        let page_size = if limit > 0 {
            limit.min(MAX_PAGE_SIZE)
        } else {
            MAX_PAGE_SIZE
        };
        params.set_page(None, page_size);

        let mut first = self.fetch_page(target, &params, 0)?;

        if limit <= MAX_PAGE_SIZE {
            return Ok(MergedResult::new(first, 1));
        }

        let mut start_index = first.start_index.unwrap_or(0);
        let results_per_page = match first.results_per_page {
            Some(n) if n > 0 => n,
            _ => page_size as i64,
        };
        let total_results = first.total_results.unwrap_or(0);
        let wanted = usize::try_from(total_results.min(i64::try_from(limit).unwrap_or(i64::MAX)))
            .unwrap_or(0);

        let mut items = first.take_items();
        let mut pages_fetched = 1;

        if items.len() >= wanted {
            items.truncate(wanted);
            return Ok(MergedResult::new(first.with_items(items), pages_fetched));
        }

        self.progress_reporter.report(&format!(
            "🔎 Fetching {} {} records in pages of {}...",
            wanted, target, results_per_page
        ));
        self.progress_reporter
            .report_progress(items.len(), wanted, Some("page 1"));

        loop {
            let next_start = start_index
                .checked_add(results_per_page)
                .and_then(|next| u64::try_from(next).ok().map(|wire| (next, wire)));
            let Some((next, wire_start)) = next_start else {
                warn!(
                    "NVD paging metadata out of range (startIndex={}, resultsPerPage={}); returning {} of {} wanted records",
                    start_index,
                    results_per_page,
                    items.len(),
                    wanted
                );
                break;
            };
            start_index = next;
            if start_index >= total_results || items.len() >= wanted {
                break;
            }

            params.set_page(Some(wire_start), results_per_page.unsigned_abs());
            let batch = match self.fetch_page(target, &params, start_index) {
                Ok(batch) => batch,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Page request at startIndex={} failed",
                        start_index
                    ));
                    return Err(e);
                }
            };
            pages_fetched += 1;

            let batch_items = batch.into_items();
            if batch_items.is_empty() {
                warn!(
                    "NVD returned an empty page at startIndex={} (totalResults={}); returning {} of {} wanted records",
                    start_index,
                    total_results,
                    items.len(),
                    wanted
                );
                break;
            }
            items.extend(batch_items);

            self.progress_reporter.report_progress(
                items.len().min(wanted),
                wanted,
                Some(&format!("page {}", pages_fetched)),
            );
        }

        items.truncate(wanted);
        self.progress_reporter.report_completion(&format!(
            "✅ Fetched {} {} records in {} pages",
            items.len(),
            target,
            pages_fetched
        ));

        Ok(MergedResult::new(first.with_items(items), pages_fetched))
    }

    /// Issues one request and pauses for the rate-limit delay once it succeeded
    fn fetch_page(
        &self,
        target: SearchTarget,
        params: &WireParameters,
        start_index: i64,
    ) -> Result<ResultPage> {
        self.check_cancelled(start_index)?;

        let url = format!("{}?{}", target.endpoint(), params.to_query_string());
        debug!("GET {}", url);

        let mut headers = vec![("content-type", "application/json")];
        if let Some(key) = self.api_key.as_deref() {
            headers.push(("apiKey", key));
        }

        let response = self.transport.get(&url, &headers)?;
        if !response.is_success() {
            return Err(NvdError::HttpStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        let page = ResultPage::from_json(&response.body, target.list_field())?;
        if let Some(message) = page.rejection_message() {
            return Err(NvdError::ApiRejected {
                message: message.to_string(),
            }
            .into());
        }

        debug!(
            "page startIndex={:?} resultsPerPage={:?} totalResults={:?} records={}",
            page.start_index,
            page.results_per_page,
            page.total_results,
            page.items().len()
        );

        self.pacer.pause(self.delay);
        Ok(page)
    }

    fn check_cancelled(&self, start_index: i64) -> Result<()> {
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::SeqCst) {
                return Err(NvdError::Cancelled {
                    start_index: start_index.max(0) as u64,
                }
                .into());
            }
        }
        Ok(())
    }
}

impl<T, P, PR> NvdSearchPort for SearchNvdUseCase<T, P, PR>
where
    T: HttpTransport,
    P: RequestPacer,
    PR: ProgressReporter,
{
    fn get_cve(&self, cve_id: &str) -> Result<SearchResponse> {
        let cve_id = cve_id.trim();
        if cve_id.is_empty() {
            return Err(NvdError::validation("--id is required").into());
        }
        self.execute(&CveSearchQuery::by_id(cve_id))
    }

    fn search_cves(&self, query: &CveSearchQuery) -> Result<SearchResponse> {
        self.execute(query)
    }

    fn search_cpes(&self, query: &CpeSearchQuery) -> Result<SearchResponse> {
        self.execute(query)
    }
}
