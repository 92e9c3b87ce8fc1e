use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that drops the output of a parser, keeping only whether
/// and how far it matched
#[derive(Debug, Clone, Copy)]
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<'code, P> Parser<'code> for Discard<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        self.parser.parse_at(input, position).map(|_| ())
    }
}

/// Convenience function to create a Discard parser
pub fn discard<'code, P>(parser: P) -> Discard<P>
where
    P: Parser<'code>,
{
    Discard::new(parser)
}

/// Extension trait to add .discard() method support for parsers
pub trait DiscardExt<'code>: Parser<'code> + Sized {
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }
}

/// Implement DiscardExt for all parsers
impl<'code, P> DiscardExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::letters;
    use crate::byte::char;
    use crate::string::string;

    #[test]
    fn test_discard_success() {
        let parser = string("let").discard();
        assert_eq!(parser.parse(b"let x"), ParseResult::success(3, ()));
    }

    #[test]
    fn test_discard_failure() {
        let parser = discard(char(b'x'));
        assert_eq!(parser.parse_at(b"abc", 2), ParseResult::fail(2));
    }

    #[test]
    fn test_discard_keeps_end_position() {
        let parser = letters().discard();
        assert_eq!(parser.parse(b"hello world").position(), 5);
    }
}
