use super::class::is_blank;
use crate::parser::Parser;
use crate::state::ParseResult;
use crate::take_while::TakeWhileParser;

/// The longest run of bytes accepted by an ASCII class predicate, as text
///
/// The class predicates only accept ASCII bytes, so the run is always
/// valid UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct RunParser {
    run: TakeWhileParser<fn(&u8) -> bool>,
}

impl<'code> Parser<'code> for RunParser {
    type Output = &'code str;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match self.run.parse_at(input, position).into_success() {
            Some((run, end)) => match std::str::from_utf8(run) {
                Ok(text) => ParseResult::success(end, text),
                Err(_) => ParseResult::fail(position),
            },
            None => ParseResult::fail(position),
        }
    }
}

fn run(predicate: fn(&u8) -> bool) -> RunParser {
    RunParser {
        run: TakeWhileParser::new(predicate),
    }
}

/// Zero or more ASCII letters
pub fn letters() -> RunParser {
    run(u8::is_ascii_alphabetic)
}

/// Zero or more ASCII digits
pub fn digits() -> RunParser {
    run(u8::is_ascii_digit)
}

/// Zero or more spaces, newlines and tabs
pub fn whitespaces() -> RunParser {
    run(is_blank)
}

/// Zero or more ASCII letters and digits
pub fn alphanumerics() -> RunParser {
    run(u8::is_ascii_alphanumeric)
}
