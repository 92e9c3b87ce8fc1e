use crate::parser::Parser;
use crate::state::ParseResult;
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    factory: F,
    _phantom: PhantomData<&'code ()>,
}

impl<'code, F, P> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, P> Clone for Lazy<'code, F, P>
where
    F: Fn() -> P + Clone,
    P: Parser<'code>,
{
    fn clone(&self) -> Self {
        Lazy::new(self.factory.clone())
    }
}

impl<'code, F, P> Parser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse_at(input, position)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::attempt::attempt;
    use crate::byte::char;
    use crate::discard::DiscardExt;
    use crate::followed_by::FollowedByExt;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::then::ThenExt;

    /// nested := integer | '(' nested ')'
    fn nested<'code>() -> BoxedParser<'code, i64> {
        integer()
            .or(char(b'(')
                .discard()
                .then(lazy(nested))
                .followed_by(char(b')').discard()))
            .boxed()
    }

    /// sum := '[' (item ' '?)* ']' where item is an integer or a nested sum
    fn sum<'code>() -> BoxedParser<'code, i64> {
        let separator = attempt(char(b' ').discard(), ());
        let item = integer().or(lazy(sum)).followed_by(separator);
        char(b'[')
            .discard()
            .then(many(item))
            .followed_by(char(b']').discard())
            .map(|items| items.iter().sum::<i64>())
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| char(b'a'));
        assert_eq!(parser.parse(b"aaaa"), ParseResult::success(1, b'a'));
    }

    #[test]
    fn test_lazy_with_many() {
        let parser = lazy(|| many(char(b'a')));
        let result = parser.parse(b"aaaa");
        assert_eq!(result.position(), 4);
        assert_eq!(result.into_value().unwrap().len(), 4);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let parser = nested();
        assert_eq!(parser.parse(b"7"), ParseResult::success(1, 7));
        assert_eq!(parser.parse(b"((-12))"), ParseResult::success(7, -12));
        assert_eq!(parser.parse(b"((3)"), ParseResult::fail(0));
    }

    #[test]
    fn test_lazy_recursive_sum() {
        let parser = sum();
        assert_eq!(parser.parse(b"[1 2 [3 4] 5]"), ParseResult::success(13, 15));
        assert_eq!(parser.parse(b"[]"), ParseResult::success(2, 0));
    }
}
