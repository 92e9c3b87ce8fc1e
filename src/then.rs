use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that runs a unit parser, then another parser, and keeps
/// the second output
#[derive(Debug, Clone, Copy)]
pub struct Then<P1, P2> {
    prefix: P1,
    parser: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(prefix: P1, parser: P2) -> Self {
        Then { prefix, parser }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code, Output = ()>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let Some(((), middle)) = self.prefix.parse_at(input, position).into_success() else {
            return ParseResult::fail(position);
        };
        let Some((value, end)) = self.parser.parse_at(input, middle).into_success() else {
            return ParseResult::fail(position);
        };
        ParseResult::success(end, value)
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(prefix: P1, parser: P2) -> Then<P1, P2>
where
    P1: Parser<'code, Output = ()>,
    P2: Parser<'code>,
{
    Then::new(prefix, parser)
}

/// Extension trait to add .then() method support for unit parsers
pub trait ThenExt<'code>: Parser<'code, Output = ()> + Sized {
    fn then<P>(self, parser: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, parser)
    }
}

/// Implement ThenExt for all unit parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code, Output = ()> {}
