//! Single-byte character classes and the canned parsers built from them
//!
//! Classification is plain ASCII: bytes 0x80 and above are never letters,
//! digits or whitespace.

pub mod class;
pub mod integer;
pub mod run;
pub mod word;

pub use class::{ClassParser, alphanumeric, digit, is_blank, letter, whitespace};
pub use integer::{IntegerParser, integer};
pub use run::{RunParser, alphanumerics, digits, letters, whitespaces};
pub use word::{WordParser, word};
