use super::run::{RunParser, letters, whitespaces};
use crate::discard::{Discard, DiscardExt};
use crate::filter::{FilterExt, FilterParser};
use crate::then::{Then, ThenExt};

/// Skips leading whitespace and then requires one or more letters
pub type WordParser = Then<Discard<RunParser>, FilterParser<RunParser, fn(&&str) -> bool>>;

fn is_nonempty(run: &&str) -> bool {
    !run.is_empty()
}

/// Parser that skips leading whitespace and then requires one or more letters
///
/// Only the letters are returned.
pub fn word() -> WordParser {
    whitespaces()
        .discard()
        .then(letters().filter(is_nonempty as fn(&&str) -> bool))
}
