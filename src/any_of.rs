use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser combinator that tries a list of parsers in order and returns the
/// first match
///
/// Fails straight away at end of input, before trying any alternative.
/// Alternatives of different concrete types can be mixed through
/// [`crate::BoxedParser`].
#[derive(Debug, Clone)]
pub struct AnyOf<P> {
    parsers: Vec<P>,
}

impl<P> AnyOf<P> {
    pub fn new(parsers: impl IntoIterator<Item = P>) -> Self {
        AnyOf {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code, P> Parser<'code> for AnyOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        if position >= input.len() {
            return ParseResult::fail(position);
        }
        self.parsers
            .iter()
            .map(|parser| parser.parse_at(input, position))
            .find(ParseResult::is_success)
            .unwrap_or_else(|| ParseResult::fail(position))
    }
}

/// Convenience function to create an AnyOf parser
pub fn any_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> AnyOf<P>
where
    P: Parser<'code>,
{
    AnyOf::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::byte::char;
    use crate::map::MapExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::string::string;

    #[test]
    fn test_any_of_picks_matching_alternative() {
        let parser = any_of([char(b'x'), char(b'y')]);
        assert_eq!(parser.parse(b"y"), ParseResult::success(1, b'y'));
        assert_eq!(parser.parse(b"z"), ParseResult::fail(0));
    }

    #[test]
    fn test_any_of_first_match_wins() {
        let parser = any_of([string("a"), string("ab")]);
        assert_eq!(parser.parse(b"ab"), ParseResult::success(1, "a"));
    }

    #[test]
    fn test_any_of_at_end_of_input() {
        let parser = any_of([char(b'x'), char(b'y')]);
        assert_eq!(parser.parse(b""), ParseResult::fail(0));
        assert_eq!(parser.parse_at(b"x", 1), ParseResult::fail(1));
    }

    #[test]
    fn test_any_of_empty_list() {
        let parser = any_of(Vec::<crate::byte::CharParser>::new());
        assert_eq!(parser.parse(b"a"), ParseResult::fail(0));
    }

    #[test]
    fn test_any_of_boxed_alternatives() {
        let parsers: Vec<BoxedParser<String>> = vec![
            integer().map(|n| format!("int {}", n)).boxed(),
            string("true").map(|_| "bool".to_string()).boxed(),
        ];
        let parser = any_of(parsers);

        assert_eq!(parser.parse(b"-3").into_value().unwrap(), "int -3");
        assert_eq!(parser.parse(b"true").into_value().unwrap(), "bool");
        assert!(!parser.parse(b"false").is_success());
    }
}
