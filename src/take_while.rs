use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser that consumes the longest run of bytes accepted by a predicate
///
/// Always succeeds inside the input, possibly with an empty run. The run is
/// returned as a slice of the input bytes.
#[derive(Debug, Clone, Copy)]
pub struct TakeWhileParser<F> {
    predicate: F,
}

impl<F> TakeWhileParser<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhileParser<F>
where
    F: Fn(&u8) -> bool,
{
    type Output = &'code [u8];

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let Some(rest) = input.get(position..) else {
            return ParseResult::fail(position);
        };
        let length = rest
            .iter()
            .position(|byte| !(self.predicate)(byte))
            .unwrap_or(rest.len());

        ParseResult::success(position + length, &rest[..length])
    }
}

/// Convenience function to create a TakeWhileParser
pub fn take_while<F>(predicate: F) -> TakeWhileParser<F>
where
    F: Fn(&u8) -> bool,
{
    TakeWhileParser::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_while_run() {
        let parser = take_while(|b: &u8| *b == b'a');
        assert_eq!(parser.parse(b"aaab"), ParseResult::success(3, &b"aaa"[..]));
    }

    #[test]
    fn test_take_while_empty_run() {
        let parser = take_while(u8::is_ascii_digit);
        assert_eq!(parser.parse(b"x1"), ParseResult::success(0, &b""[..]));
    }

    #[test]
    fn test_take_while_to_end() {
        let parser = take_while(u8::is_ascii_digit);
        assert_eq!(parser.parse_at(b"x123", 1), ParseResult::success(4, &b"123"[..]));
        assert_eq!(parser.parse_at(b"x123", 4), ParseResult::success(4, &b""[..]));
    }

    #[test]
    fn test_take_while_past_end_fails() {
        let parser = take_while(u8::is_ascii_digit);
        assert_eq!(parser.parse_at(b"1", 3), ParseResult::fail(3));
    }

    #[test]
    fn test_take_while_accepts_high_bytes() {
        let parser = take_while(|b: &u8| *b != b' ');
        assert_eq!(
            parser.parse(b"caf\xe9 au lait"),
            ParseResult::success(4, &b"caf\xe9"[..])
        );

        let anything = take_while(|_: &u8| true);
        assert_eq!(
            anything.parse(&[0xff, 0xfe]),
            ParseResult::success(2, &[0xff, 0xfe][..])
        );
    }
}
