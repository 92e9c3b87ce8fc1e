use super::run::digits;
use crate::parser::Parser;
use crate::state::ParseResult;

/// Parser for signed decimal integers: an optional `-`, then digits
///
/// A multi-digit number may not start with `0`. Values outside the `i64`
/// range do not match.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = i64;

    fn parse_at(&self, input: &'code [u8], position: usize) -> ParseResult<Self::Output> {
        let negative = input.get(position) == Some(&b'-');
        let digits_start = if negative { position + 1 } else { position };

        let Some((run, end)) = digits().parse_at(input, digits_start).into_success() else {
            return ParseResult::fail(position);
        };
        let run = run.as_bytes();
        if run.is_empty() || (run.len() > 1 && run[0] == b'0') {
            return ParseResult::fail(position);
        }

        // Accumulate towards the sign so i64::MIN is reachable
        let value = run.iter().try_fold(0i64, |acc, byte| {
            let digit = i64::from(byte - b'0');
            let shifted = acc.checked_mul(10)?;
            if negative {
                shifted.checked_sub(digit)
            } else {
                shifted.checked_add(digit)
            }
        });

        match value {
            Some(value) => ParseResult::success(end, value),
            None => ParseResult::fail(position),
        }
    }
}

/// Convenience function to create an IntegerParser
pub fn integer() -> IntegerParser {
    IntegerParser
}
