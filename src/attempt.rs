use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that never fails: if the inner parser does not match,
/// it succeeds with a fallback value without consuming input
#[derive(Debug, Clone, Copy)]
pub struct Attempt<P, T> {
    parser: P,
    fallback: T,
}

impl<P, T> Attempt<P, T> {
    pub fn new(parser: P, fallback: T) -> Self {
        Attempt { parser, fallback }
    }
}

impl<'code, P, T> Parser<'code> for Attempt<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let result = self.parser.parse_at(input, position);
        if result.is_success() {
            return result;
        }
        ParseResult::success(position, self.fallback.clone())
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P, T>(parser: P, fallback: T) -> Attempt<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    Attempt::new(parser, fallback)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self, fallback: Self::Output) -> Attempt<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Attempt::new(self, fallback)
    }

    /// Like [`AttemptExt::attempt`] with `Default::default()` as the fallback
    fn or_default(self) -> Attempt<Self, Self::Output>
    where
        Self::Output: Clone + Default,
    {
        Attempt::new(self, <Self::Output as Default>::default())
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}
