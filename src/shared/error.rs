use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a bad query apart from an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the merged document was written
    Success = 0,
    /// Any failure not covered below (output I/O, unexpected errors)
    GeneralError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The query or client configuration was rejected before any request
    InvalidQuery = 3,
    /// A page request failed or the NVD API rejected the query
    UpstreamError = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching the root cause of `err`.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<NvdError>() {
            Some(e) if e.is_input_error() => ExitCode::InvalidQuery,
            Some(e) if e.is_upstream_error() => ExitCode::UpstreamError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::GeneralError => write!(f, "General Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::InvalidQuery => write!(f, "Invalid Query (3)"),
            ExitCode::UpstreamError => write!(f, "Upstream Error (4)"),
        }
    }
}

/// Application-specific errors for NVD queries.
#[derive(Debug, Error)]
pub enum NvdError {
    /// A filter or filter combination was rejected before any request
    #[error("{message}")]
    Validation { message: String },

    #[error("invalid date: {value:?} (use RFC3339 or 'YYYY-MM-DD HH:MM')")]
    InvalidDate { value: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    #[error("Request to the NVD API failed: {details}\n\n💡 Hint: Please check your internet connection and proxy settings")]
    Transport { details: String },

    #[error("nvd api error: status={status} body={body}")]
    HttpStatus { status: u16, body: String },

    /// 2xx response whose body carries a non-empty `message`
    #[error("{message}")]
    ApiRejected { message: String },

    #[error("Failed to decode NVD API response: {details}")]
    Decode { details: String },

    #[error("Query cancelled before page at startIndex={start_index}")]
    Cancelled { start_index: u64 },

    #[error("Failed to format output: {details}")]
    Output { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl NvdError {
    pub fn validation(message: impl Into<String>) -> Self {
        NvdError::Validation {
            message: message.into(),
        }
    }

    /// Errors the caller fixes by changing input (flags, config)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NvdError::Validation { .. }
                | NvdError::InvalidDate { .. }
                | NvdError::Configuration { .. }
        )
    }

    /// Errors raised while talking to the NVD API
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            NvdError::Transport { .. }
                | NvdError::HttpStatus { .. }
                | NvdError::ApiRejected { .. }
                | NvdError::Decode { .. }
        )
    }
}
