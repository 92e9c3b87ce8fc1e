use crate::many::Many;
use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that matches at least `count` occurrences of the given parser
///
/// Runs [`Many`] to completion and then checks the number of matches, so it
/// consumes every match it can find.
#[derive(Debug, Clone, Copy)]
pub struct AtLeast<P> {
    count: usize,
    many: Many<P>,
}

impl<P> AtLeast<P> {
    pub fn new(count: usize, parser: P) -> Self {
        AtLeast {
            count,
            many: Many::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for AtLeast<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match self.many.parse_at(input, position).into_success() {
            Some((results, end)) if results.len() >= self.count => {
                ParseResult::success(end, results)
            }
            _ => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create an AtLeast parser
pub fn at_least<'code, P>(count: usize, parser: P) -> AtLeast<P>
where
    P: Parser<'code>,
{
    AtLeast::new(count, parser)
}

/// One or more occurrences of the given parser
pub fn at_least_one<'code, P>(parser: P) -> AtLeast<P>
where
    P: Parser<'code>,
{
    AtLeast::new(1, parser)
}
