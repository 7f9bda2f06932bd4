use crate::application::dto::ClientOptions;
use crate::ports::outbound::{HttpResponse, HttpTransport};
use crate::shared::error::NvdError;
use crate::shared::Result;
use reqwest::blocking::Client;

/// NvdHttpClient adapter - blocking reqwest implementation of HttpTransport
///
/// # Security
/// - Implements timeout (30 seconds by default)
/// - Does not retry failed requests (the first failure aborts the search)
/// - Never logs request headers, which carry the API key
pub struct NvdHttpClient {
    client: Client,
}

impl NvdHttpClient {
    /// Creates a client honouring the timeout and proxy of `options`
    ///
    /// # Errors
    /// Returns a configuration error if the proxy URL cannot be parsed
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nvd-query/{}", version);
        let mut builder = Client::builder()
            .timeout(options.timeout)
            .user_agent(user_agent);

        if let Some(proxy_url) = options.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| NvdError::Configuration {
                message: format!("invalid --proxy {:?}: {}", proxy_url, e),
                hint: "Use a full URL such as http://127.0.0.1:8080".to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl HttpTransport for NvdHttpClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| NvdError::Transport {
            details: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .map_err(|e| NvdError::Transport {
                details: format!("failed to read response body: {}", e),
            })?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
