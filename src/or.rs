use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the same position
///
/// Left-biased: when both would match, the first one wins.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let first = self.parser1.parse_at(input, position);
        if first.is_success() {
            return first;
        }
        let second = self.parser2.parse_at(input, position);
        if second.is_success() {
            return second;
        }
        ParseResult::fail(position)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::char;
    use crate::string::string;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(char(b'a'), char(b'b'));
        assert_eq!(parser.parse(b"abc"), ParseResult::success(1, b'a'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(char(b'a'), char(b'b'));
        assert_eq!(parser.parse(b"bcd"), ParseResult::success(1, b'b'));
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(char(b'a'), char(b'b'));
        assert_eq!(parser.parse_at(b"xxyz", 1), ParseResult::fail(1));
    }

    #[test]
    fn test_or_is_left_biased() {
        let parser = string("ab").or(string("abc"));
        let result = parser.parse(b"abc");
        assert_eq!(result.position(), 2);
        assert_eq!(result.into_value(), Some("ab"));
    }

    #[test]
    fn test_or_second_starts_from_original_position() {
        // "abd" partially matches "abc" before failing; "ab" must still see the start
        let parser = string("abc").or(string("ab"));
        assert_eq!(parser.parse(b"abd"), ParseResult::success(2, "ab"));
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char(b'a').or(char(b'b')).or(char(b'c')).or(char(b'd'));
        assert_eq!(parser.parse(b"d"), ParseResult::success(1, b'd'));
        assert_eq!(parser.parse(b"e"), ParseResult::fail(0));
    }
}
