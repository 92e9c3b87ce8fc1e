use crate::many::Many;
use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that requires the number of occurrences of a parser to
/// lie within `min..=max`
///
/// The count is checked against the longest run [`Many`] can find; matching
/// does not stop at `max`. Six digits against `between(2, 4, digit())`
/// therefore fail, even though the first four alone would fit.
#[derive(Debug, Clone, Copy)]
pub struct Between<P> {
    min: usize,
    max: usize,
    many: Many<P>,
}

impl<P> Between<P> {
    pub fn new(min: usize, max: usize, parser: P) -> Self {
        Between {
            min,
            max,
            many: Many::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for Between<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        match self.many.parse_at(input, position).into_success() {
            Some((results, end)) if (self.min..=self.max).contains(&results.len()) => {
                ParseResult::success(end, results)
            }
            _ => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P>(min: usize, max: usize, parser: P) -> Between<P>
where
    P: Parser<'code>,
{
    Between::new(min, max, parser)
}
