/// Type alias for Result with anyhow::Error as the error type.
/// Errors raised by this crate carry an `NvdError` as their root cause.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
