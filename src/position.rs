use crate::parser::Parser;
use crate::state::ParseResult;

/// Represents a span in the input with start and end positions
/// and a reference to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the input
    pub source: &'code [u8],
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    /// Create a new span
    pub fn new(source: &'code [u8], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the slice of input that this span represents
    ///
    /// Empty if the span lies outside the source.
    pub fn slice(&self) -> &'code [u8] {
        self.source.get(self.start..self.end).unwrap_or_default()
    }

    /// Format the spanned content as a string
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(self.slice()).into_owned()
    }
}

/// A parser combinator that captures the span of a successful parse
///
/// A success reported before the start position yields an empty span at
/// the start.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let result = self.parser.parse_at(input, position);
        let end = result.position().max(position);
        result.map(|output| (output, Span::new(input, position, end)))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned parser
pub fn spanned<'code, P>(parser: P) -> Spanned<P>
where
    P: Parser<'code>,
{
    Spanned::new(parser)
}
