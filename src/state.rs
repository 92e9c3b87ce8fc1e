use crate::error::{CodeLoc, NoMatch};

/// Where a parse attempt ended and whether it matched
///
/// `position` never exceeds the length of the input the attempt ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseState {
    pub success: bool,
    pub position: usize,
}

impl ParseState {
    pub fn new(success: bool, position: usize) -> Self {
        ParseState { success, position }
    }

    /// Fresh state for starting a parse at `position`
    pub fn at(position: usize) -> Self {
        ParseState::new(true, position)
    }
}

impl Default for ParseState {
    fn default() -> Self {
        ParseState::at(0)
    }
}

/// Outcome of running a parser
///
/// A successful result always carries a value, a failed one never does.
/// The fields are private so the two shapes can only be built through
/// [`ParseResult::success`] and [`ParseResult::fail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<T> {
    state: ParseState,
    value: Option<T>,
}

impl<T> ParseResult<T> {
    pub fn success(position: usize, value: T) -> Self {
        ParseResult {
            state: ParseState::new(true, position),
            value: Some(value),
        }
    }

    pub fn fail(position: usize) -> Self {
        ParseResult {
            state: ParseState::new(false, position),
            value: None,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_success(&self) -> bool {
        self.state.success
    }

    /// End position on success, failure position otherwise
    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Split a successful result into its value and end position
    pub fn into_success(self) -> Option<(T, usize)> {
        let position = self.state.position;
        self.value.map(|value| (value, position))
    }

    /// Transform the value of a successful result, keeping its position
    pub fn map<U, F>(self, mapper: F) -> ParseResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => ParseResult::success(self.state.position, mapper(value)),
            None => ParseResult::fail(self.state.position),
        }
    }

    /// Convert into a `Result`, attaching the input so the error can point at it
    pub fn into_result<'code>(self, input: &'code [u8]) -> Result<(T, usize), NoMatch<'code>> {
        let position = self.state.position;
        self.value
            .map(|value| (value, position))
            .ok_or_else(|| NoMatch::new(CodeLoc::new(input, position)))
    }
}
