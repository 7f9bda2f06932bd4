/// Formatter adapters for the supported output formats
mod json_formatter;
mod jsonl_formatter;

pub use json_formatter::JsonFormatter;
pub use jsonl_formatter::JsonLinesFormatter;
