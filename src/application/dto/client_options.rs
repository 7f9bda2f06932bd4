use crate::shared::error::NvdError;
use std::time::Duration;

/// Settings for talking to the NVD API
///
/// Built through [`ClientOptions::new`], which enforces the NVD rate-limit
/// rules: without an API key the delay is fixed at 6 seconds, with a key it
/// may be lowered to 0.6 seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub api_key: Option<String>,
    pub delay: Duration,
    pub proxy: Option<String>,
    pub timeout: Duration,
}

impl ClientOptions {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(6);
    pub const MIN_DELAY_WITH_KEY: Duration = Duration::from_millis(600);
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Resolves the delay rules
    ///
    /// `delay_secs` of `None` or `0` selects the default delay. Empty strings
    /// for `api_key` and `proxy` count as unset.
    pub fn new(
        api_key: Option<String>,
        delay_secs: Option<f64>,
        proxy: Option<String>,
    ) -> Result<Self, NvdError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let proxy = proxy.filter(|p| !p.trim().is_empty());

        let delay = match delay_secs.filter(|d| *d != 0.0) {
            None => Self::DEFAULT_DELAY,
            Some(_) if api_key.is_none() => {
                return Err(NvdError::Configuration {
                    message: "--delay requires --api-key; without an API key the default delay is 6 seconds".to_string(),
                    hint: "Set --api-key (or NVD_API_KEY) to use a shorter delay".to_string(),
                })
            }
            Some(secs) => Duration::try_from_secs_f64(secs)
                .ok()
                .filter(|d| *d >= Self::MIN_DELAY_WITH_KEY)
                .ok_or_else(|| NvdError::Configuration {
                    message: "--delay must be >= 0.6 seconds when using --api-key".to_string(),
                    hint: "The NVD API allows 50 requests per 30 seconds with a key".to_string(),
                })?,
        };

        Ok(Self {
            api_key,
            delay,
            proxy,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            delay: Self::DEFAULT_DELAY,
            proxy: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
