use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a failure at the position the parser started from.
#[derive(Debug, Clone, Copy)]
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match self.parser.parse_at(input, position).into_success() {
            Some((value, end)) if (self.predicate)(&value) => ParseResult::success(end, value),
            _ => ParseResult::fail(position),
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::byte::any;

    #[test]
    fn test_filter_success() {
        let parser = any().filter(u8::is_ascii_alphabetic);
        assert_eq!(parser.parse(b"a"), ParseResult::success(1, b'a'));
    }

    #[test]
    fn test_filter_rejects_at_start_position() {
        let parser = any().filter(u8::is_ascii_alphabetic);
        assert_eq!(parser.parse_at(b"a1", 1), ParseResult::fail(1));
    }

    #[test]
    fn test_filter_inner_failure() {
        let parser = filter(any(), |_| true);
        assert_eq!(parser.parse(b""), ParseResult::fail(0));
    }

    #[test]
    fn test_filter_ascii_classes() {
        let test_cases = [
            (b'a', true),
            (b'Z', true),
            (b'5', false),
            (b'!', false),
            (b' ', false),
            (0xC3, false),
        ];

        for (byte, should_succeed) in test_cases {
            let data = [byte];
            let parser = any().filter(u8::is_ascii_alphabetic);
            assert_eq!(
                parser.parse(&data).is_success(),
                should_succeed,
                "unexpected result for byte 0x{:02X}",
                byte
            );
        }
    }

    #[test]
    fn test_chained_filters() {
        let parser = integer().filter(|n| *n > 0).filter(|n| n % 2 == 0);
        assert_eq!(parser.parse(b"42"), ParseResult::success(2, 42));
        assert_eq!(parser.parse(b"41"), ParseResult::fail(0));
        assert_eq!(parser.parse(b"-42"), ParseResult::fail(0));
    }
}
