use crate::shared::Result;

/// Raw outcome of one HTTP GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// HttpTransport port for issuing GET requests
///
/// This port abstracts connection handling, proxying and TLS. The paging
/// layer only needs a status code, headers and body back.
pub trait HttpTransport {
    /// Sends a GET request to `url` (query string included)
    ///
    /// # Errors
    /// Returns an error when no response was received at all (DNS, connect,
    /// timeout). Non-2xx responses are returned as `Ok`.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        (**self).get(url, headers)
    }
}
