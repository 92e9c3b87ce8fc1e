//! # prscomb - Parser Combinator Engine
//!
//! Parsers are plain values built by composing smaller parsers. There is no
//! grammar language and no code generation: a parser is constructed once and
//! can then be run on any number of inputs.
//!
//! - **Two-shape results**: every attempt ends in [`ParseResult`], either a
//!   value with the position after it, or just the position where the
//!   failing combinator started
//! - **Byte input**: input is a `&[u8]`, classified as ASCII
//! - **Immutable parsers**: running a parser never changes it, so one parser
//!   value can serve many threads at once
//!
//! ```
//! use prscomb::prelude::*;
//!
//! let ab = char(b'a')
//!     .and(char(b'b'))
//!     .map(|(a, b)| format!("{}{}", a as char, b as char));
//!
//! let result = ab.parse(b"ab");
//! assert!(result.is_success());
//! assert_eq!(result.position(), 2);
//! assert_eq!(result.into_value().as_deref(), Some("ab"));
//! ```

pub mod and;
pub mod any_of;
pub mod ascii;
pub mod at_least;
pub mod attempt;
pub mod between;
pub mod byte;
pub mod discard;
pub mod error;
pub mod filter;
pub mod followed_by;
pub mod lazy;
pub mod many;
pub mod map;
pub mod not;
pub mod or;
pub mod parser;
pub mod position;
pub mod state;
pub mod string;
pub mod take_while;
pub mod then;
pub mod trace;

pub use and::and;
pub use any_of::any_of;
pub use at_least::{at_least, at_least_one};
pub use attempt::attempt;
pub use between::between;
pub use byte::{any, between_bytes, char, one_of};
pub use discard::discard;
pub use error::{CodeLoc, NoMatch};
pub use filter::filter;
pub use followed_by::followed_by;
pub use lazy::lazy;
pub use many::many;
pub use map::map;
pub use not::not;
pub use or::or;
pub use parser::{BoxedParser, Parser, from_fn};
pub use position::{Span, spanned};
pub use state::{ParseResult, ParseState};
pub use string::{bytes, string};
pub use take_while::take_while;
pub use then::then;
pub use trace::traced;

/// Everything needed to build and run parsers, extension traits included
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::ascii::{
        alphanumeric, alphanumerics, digit, digits, integer, letter, letters, whitespace,
        whitespaces, word,
    };
    pub use crate::attempt::AttemptExt;
    pub use crate::discard::DiscardExt;
    pub use crate::filter::FilterExt;
    pub use crate::followed_by::FollowedByExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::not::NotExt;
    pub use crate::or::OrExt;
    pub use crate::parser::BoxedExt;
    pub use crate::position::SpannedExt;
    pub use crate::then::ThenExt;
    pub use crate::trace::TracedExt;
    pub use crate::{
        BoxedParser, ParseResult, ParseState, Parser, and, any, any_of, at_least, at_least_one,
        attempt, between, between_bytes, bytes, char, discard, filter, followed_by, from_fn, lazy,
        many, map, not, one_of, or, spanned, string, take_while, then, traced,
    };
}
