use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser that consumes and returns a single byte, whatever it is
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyParser;

impl AnyParser {
    pub fn new() -> Self {
        AnyParser
    }
}

impl<'code> Parser<'code> for AnyParser {
    type Output = u8;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match input.get(position) {
            Some(&byte) => ParseResult::success(position + 1, byte),
            None => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create an AnyParser
pub fn any() -> AnyParser {
    AnyParser::new()
}

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy)]
pub struct CharParser {
    expected: u8,
}

impl CharParser {
    pub fn new(expected: u8) -> Self {
        CharParser { expected }
    }
}

impl<'code> Parser<'code> for CharParser {
    type Output = u8;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match input.get(position) {
            Some(&byte) if byte == self.expected => ParseResult::success(position + 1, byte),
            _ => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create a CharParser
pub fn char(expected: u8) -> CharParser {
    CharParser::new(expected)
}

/// Parser that matches a byte within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct BetweenBytesParser {
    start: u8,
    end: u8,
}

impl BetweenBytesParser {
    pub fn new(start: u8, end: u8) -> Self {
        BetweenBytesParser { start, end }
    }
}

impl<'code> Parser<'code> for BetweenBytesParser {
    type Output = u8;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match input.get(position) {
            Some(&byte) if (self.start..=self.end).contains(&byte) => {
                ParseResult::success(position + 1, byte)
            }
            _ => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create a BetweenBytesParser
pub fn between_bytes(start: u8, end: u8) -> BetweenBytesParser {
    BetweenBytesParser::new(start, end)
}

/// Parser that matches one byte out of a set
#[derive(Debug, Clone)]
pub struct OneOfParser {
    set: Vec<u8>,
}

impl OneOfParser {
    pub fn new(set: impl AsRef<[u8]>) -> Self {
        OneOfParser {
            set: set.as_ref().to_vec(),
        }
    }
}

impl<'code> Parser<'code> for OneOfParser {
    type Output = u8;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match input.get(position) {
            Some(byte) if self.set.contains(byte) => ParseResult::success(position + 1, *byte),
            _ => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create a OneOfParser
pub fn one_of(set: impl AsRef<[u8]>) -> OneOfParser {
    OneOfParser::new(set)
}
