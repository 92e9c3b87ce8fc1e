use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at end of input, at the first failed attempt, or at the
/// first attempt that matches without consuming anything (that match is not
/// recorded). Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let mut results = Vec::new();
        let mut current = position;

        while current < input.len() {
            match self.parser.parse_at(input, current).into_success() {
                Some((value, next)) if next > current => {
                    results.push(value);
                    current = next;
                }
                _ => break,
            }
        }

        ParseResult::success(current, results)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
