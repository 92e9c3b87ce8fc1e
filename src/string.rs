use crate::parser::Parser;
use crate::state::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact sequence of bytes
///
/// Fails without consuming anything on the first mismatch or when the
/// input runs out. Any byte may appear in the pattern, so single-byte
/// encodings such as Latin-1 can be matched directly.
#[derive(Debug, Clone)]
pub struct BytesParser {
    expected: Cow<'static, [u8]>,
}

impl BytesParser {
    pub fn new(expected: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for BytesParser {
    type Output = &'code [u8];

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let Some(candidate) = position
            .checked_add(self.expected.len())
            .and_then(|end| input.get(position..end))
        else {
            return ParseResult::fail(position);
        };
        if candidate != &*self.expected {
            return ParseResult::fail(position);
        }
        ParseResult::success(position + candidate.len(), candidate)
    }
}

/// Convenience function to create a BytesParser
pub fn bytes(expected: impl Into<Cow<'static, [u8]>>) -> BytesParser {
    BytesParser::new(expected)
}

/// Parser that matches an exact string byte by byte
///
/// On success returns the matched slice of the input as text.
#[derive(Debug, Clone)]
pub struct StringParser {
    bytes: BytesParser,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = match expected.into() {
            Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
            Cow::Owned(text) => Cow::Owned(text.into_bytes()),
        };
        Self {
            bytes: BytesParser::new(expected),
        }
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match self.bytes.parse_at(input, position).into_success() {
            Some((matched, end)) => match std::str::from_utf8(matched) {
                Ok(text) => ParseResult::success(end, text),
                Err(_) => ParseResult::fail(position),
            },
            None => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
