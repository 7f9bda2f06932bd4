use crate::application::dto::SearchResponse;
use crate::shared::Result;

/// ResultFormatter port for rendering a merged search result
pub trait ResultFormatter {
    /// Formats the response as text ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails or the document shape does not
    /// suit the format
    fn format(&self, response: &SearchResponse) -> Result<String>;
}
