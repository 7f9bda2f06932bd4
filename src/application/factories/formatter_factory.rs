use crate::adapters::outbound::formatters::{JsonFormatter, JsonLinesFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ResultFormatter;

/// Factory for creating result formatters
///
/// Selects the formatter adapter matching the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `pretty` only affects [`OutputFormat::Json`]; JSON Lines output is always compact.
    ///
    /// # Examples
    /// ```
    /// use nvd_query::application::dto::OutputFormat;
    /// use nvd_query::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, true);
    /// ```
    pub fn create(format: OutputFormat, pretty: bool) -> Box<dyn ResultFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
            OutputFormat::Jsonl => Box::new(JsonLinesFormatter::new()),
        }
    }
}
