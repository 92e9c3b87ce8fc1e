use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Rust has no
/// variadic generics, and the nesting keeps the parsing order explicit when
/// destructuring.
///
/// If either side fails the whole sequence fails at the position it started
/// from, not where the inner parser gave up.
///
/// Example:
/// ```
/// use prscomb::and::AndExt;
/// use prscomb::ascii::{digits, integer};
/// use prscomb::byte::char;
/// use prscomb::parser::Parser;
///
/// let result = integer()
///     .and(char(b'.'))
///     .and(digits())
///     .parse(b"123.456");
/// let ((int_part, _), frac_part) = result.into_value().unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, "456");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let Some((result1, middle)) = self.parser1.parse_at(input, position).into_success() else {
            return ParseResult::fail(position);
        };
        let Some((result2, end)) = self.parser2.parse_at(input, middle).into_success() else {
            return ParseResult::fail(position);
        };
        ParseResult::success(end, (result1, result2))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
