mod flag_encoding;

pub use flag_encoding::{FlagEncoding, FlagEncodingPolicy};
