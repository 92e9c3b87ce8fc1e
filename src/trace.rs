use crate::parser::Parser;
use crate::state::ParseResult;
use std::borrow::Cow;

/// Parser combinator that logs every attempt of the wrapped parser at trace level
///
/// Useful while developing a grammar:
/// `RUST_LOG=prscomb=trace cargo test my_test -- --nocapture`
#[derive(Debug, Clone)]
pub struct Traced<P> {
    name: Cow<'static, str>,
    parser: P,
}

impl<P> Traced<P> {
    pub fn new(name: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Traced {
            name: name.into(),
            parser,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code, P> Parser<'code> for Traced<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        log::trace!("{}: trying at {}", self.name, position);
        let result = self.parser.parse_at(input, position);
        if result.is_success() {
            log::trace!(
                "{}: matched {}..{} {:?}",
                self.name,
                position,
                result.position(),
                String::from_utf8_lossy(input.get(position..result.position()).unwrap_or_default())
            );
        } else {
            log::trace!("{}: no match at {}", self.name, result.position());
        }
        result
    }
}

/// Convenience function to create a Traced parser
pub fn traced<'code, P>(name: impl Into<Cow<'static, str>>, parser: P) -> Traced<P>
where
    P: Parser<'code>,
{
    Traced::new(name, parser)
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'code>: Parser<'code> + Sized {
    fn traced(self, name: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(name, self)
    }
}

/// Implement TracedExt for all parsers
impl<'code, P> TracedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::{integer, word};

    #[test_log::test]
    fn test_traced_is_transparent() {
        let parser = word().traced("word").and(integer().traced("integer"));
        assert_eq!(parser.parse(b" abc-5"), ParseResult::success(6, ("abc", -5)));
        assert_eq!(parser.parse(b" abc x"), ParseResult::fail(0));
    }

    #[test_log::test]
    fn test_traced_name() {
        let parser = traced(format!("rule {}", 1), integer());
        assert_eq!(parser.name(), "rule 1");
        assert_eq!(parser.parse(b"9"), ParseResult::success(1, 9));
    }
}
