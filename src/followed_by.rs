use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that runs a parser, then a unit parser, and keeps the
/// first output
///
/// The second parser must produce `()`; pass any other parser through
/// [`crate::discard`] first.
#[derive(Debug, Clone, Copy)]
pub struct FollowedBy<P1, P2> {
    parser: P1,
    terminator: P2,
}

impl<P1, P2> FollowedBy<P1, P2> {
    pub fn new(parser: P1, terminator: P2) -> Self {
        FollowedBy { parser, terminator }
    }
}

impl<'code, P1, P2> Parser<'code> for FollowedBy<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = ()>,
{
    type Output = P1::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let Some((value, middle)) = self.parser.parse_at(input, position).into_success() else {
            return ParseResult::fail(position);
        };
        let Some(((), end)) = self.terminator.parse_at(input, middle).into_success() else {
            return ParseResult::fail(position);
        };
        ParseResult::success(end, value)
    }
}

/// Convenience function to create a FollowedBy parser
pub fn followed_by<'code, P1, P2>(parser: P1, terminator: P2) -> FollowedBy<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = ()>,
{
    FollowedBy::new(parser, terminator)
}

/// Extension trait to add .followed_by() method support for parsers
pub trait FollowedByExt<'code>: Parser<'code> + Sized {
    fn followed_by<P>(self, terminator: P) -> FollowedBy<Self, P>
    where
        P: Parser<'code, Output = ()>,
    {
        FollowedBy::new(self, terminator)
    }
}

/// Implement FollowedByExt for all parsers
impl<'code, P> FollowedByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::byte::char;
    use crate::discard::DiscardExt;

    #[test]
    fn test_followed_by_keeps_first() {
        let parser = integer().followed_by(char(b';').discard());
        assert_eq!(parser.parse(b"42;rest"), ParseResult::success(3, 42));
    }

    #[test]
    fn test_followed_by_terminator_missing() {
        let parser = integer().followed_by(char(b';').discard());
        assert_eq!(parser.parse(b"42,"), ParseResult::fail(0));
    }

    #[test]
    fn test_followed_by_first_fails() {
        let parser = followed_by(integer(), char(b';').discard());
        assert_eq!(parser.parse_at(b" x;", 1), ParseResult::fail(1));
    }
}
