use crate::state::{ParseResult, ParseState};
use std::marker::PhantomData;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value: running it twice on the same input and
/// position yields the same result, and it may be shared between threads
/// as long as its parts can.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse `input` starting at `position`
    ///
    /// On success the result holds the value and the position right after
    /// the consumed bytes. On failure it holds only a position.
    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output>;

    /// Attempt to parse `input` from its start
    fn parse(&self, input: &'code [u8]) -> ParseResult<Self::Output> {
        self.parse_at(input, 0)
    }

    /// Continue from a previous state, failing right away if it already failed
    fn resume(&self, input: &'code [u8], state: ParseState) -> ParseResult<Self::Output> {
        if !state.success {
            return ParseResult::fail(state.position);
        }
        self.parse_at(input, state.position)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        (**self).parse_at(input, position)
    }
}

/// Type-erased, cheaply clonable parser
///
/// Needed wherever parsers of different concrete types must share one
/// type, e.g. a list of alternatives or a recursive grammar rule.
pub struct BoxedParser<'code, T> {
    parser: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        self.parser.parse_at(input, position)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Parser backed by a plain function or closure
pub struct FnParser<'code, F> {
    function: F,
    _phantom: PhantomData<&'code ()>,
}

impl<F: Clone> Clone for FnParser<'_, F> {
    fn clone(&self) -> Self {
        FnParser {
            function: self.function.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for FnParser<'code, F>
where
    F: Fn(&'code [u8], usize) -> ParseResult<T>,
{
    type Output = T;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        (self.function)(input, position)
    }
}

/// Lift a closure taking `(input, position)` into a parser
pub fn from_fn<'code, F, T>(function: F) -> FnParser<'code, F>
where
    F: Fn(&'code [u8], usize) -> ParseResult<T>,
{
    FnParser {
        function,
        _phantom: PhantomData,
    }
}
