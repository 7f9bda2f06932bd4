use nvd_query::prelude::*;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A raw CVE page with `count` records numbered from `start`
pub fn cve_page(start: usize, per_page: usize, total: usize, count: usize) -> Value {
    json!({
        "resultsPerPage": per_page,
        "startIndex": start,
        "totalResults": total,
        "format": "NVD_CVE",
        "version": "2.0",
        "timestamp": "2024-05-01T00:00:00.000",
        "vulnerabilities": (start..start + count)
            .map(|i| json!({"cve": {"id": format!("CVE-2024-{:05}", i)}}))
            .collect::<Vec<_>>(),
    })
}

/// A raw CPE page with `count` records numbered from `start`
pub fn cpe_page(start: usize, per_page: usize, total: usize, count: usize) -> Value {
    json!({
        "resultsPerPage": per_page,
        "startIndex": start,
        "totalResults": total,
        "format": "NVD_CPE",
        "version": "2.0",
        "products": (start..start + count)
            .map(|i| json!({"cpe": {"cpeName": format!("cpe:2.3:a:vendor:product:{}:*:*:*:*:*:*:*", i)}}))
            .collect::<Vec<_>>(),
    })
}

enum Scripted {
    Response(u16, String),
    Failure(String),
}

/// Mock HttpTransport replaying scripted responses and recording requests
#[derive(Default, Clone)]
pub struct MockNvdTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub headers: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl MockNvdTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: Value) -> Self {
        self.with_status(200, &page.to_string())
    }

    pub fn with_status(self, status: u16, body: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Response(status, body.to_string()));
        self
    }

    pub fn with_failure(self, details: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(details.to_string()));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn header_of(&self, request: usize, name: &str) -> Option<String> {
        self.headers.lock().unwrap()[request]
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

impl HttpTransport for MockNvdTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        self.headers.lock().unwrap().push(
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Response(status, body)) => Ok(HttpResponse::new(status, body)),
            Some(Scripted::Failure(details)) => Err(NvdError::Transport { details }.into()),
            None => panic!("unexpected request: {}", url),
        }
    }
}
