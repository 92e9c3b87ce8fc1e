use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that performs negative lookahead and consumes one byte
///
/// Fails if the given parser matches at the current position. Otherwise
/// succeeds with () and moves forward exactly one byte, however far the
/// failed attempt looked. At end of input there is no byte to consume, so
/// it fails.
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        if position >= input.len() || self.parser.parse_at(input, position).is_success() {
            return ParseResult::fail(position);
        }
        ParseResult::success(position + 1, ())
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
