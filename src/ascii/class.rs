use crate::byte::{AnyParser, any};
use crate::filter::{FilterExt, FilterParser};

/// A single byte accepted by a class predicate
pub type ClassParser = FilterParser<AnyParser, fn(&u8) -> bool>;

/// Space, newline or tab
pub fn is_blank(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\t')
}

fn class(predicate: fn(&u8) -> bool) -> ClassParser {
    any().filter(predicate)
}

/// Parser that matches a single ASCII letter (a-z, A-Z)
pub fn letter() -> ClassParser {
    class(u8::is_ascii_alphabetic)
}

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> ClassParser {
    class(u8::is_ascii_digit)
}

/// Parser that matches a single space, newline or tab
pub fn whitespace() -> ClassParser {
    class(is_blank)
}

/// Parser that matches a single ASCII letter or digit
pub fn alphanumeric() -> ClassParser {
    class(u8::is_ascii_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::state::ParseResult;

    #[test]
    fn test_letter() {
        for byte in (b'a'..=b'z').chain(b'A'..=b'Z') {
            let data = [byte, b'!'];
            assert_eq!(letter().parse(&data), ParseResult::success(1, byte));
        }
        assert_eq!(letter().parse(b"1"), ParseResult::fail(0));
        assert_eq!(letter().parse(b"_"), ParseResult::fail(0));
        assert_eq!(letter().parse(&[0xC3, 0xA9]), ParseResult::fail(0));
    }

    #[test]
    fn test_digit() {
        for byte in b'0'..=b'9' {
            assert_eq!(digit().parse(&[byte]), ParseResult::success(1, byte));
        }
        assert_eq!(digit().parse(b"a"), ParseResult::fail(0));
        assert_eq!(digit().parse(b"/"), ParseResult::fail(0));
        assert_eq!(digit().parse(b":"), ParseResult::fail(0));
    }

    #[test]
    fn test_whitespace_members() {
        assert_eq!(whitespace().parse(b" a"), ParseResult::success(1, b' '));
        assert_eq!(whitespace().parse(b"\ta"), ParseResult::success(1, b'\t'));
        assert_eq!(whitespace().parse(b"\na"), ParseResult::success(1, b'\n'));
    }

    #[test]
    fn test_whitespace_excludes_carriage_return() {
        assert_eq!(whitespace().parse(b"\r\n"), ParseResult::fail(0));
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(alphanumeric().parse(b"a"), ParseResult::success(1, b'a'));
        assert_eq!(alphanumeric().parse(b"7"), ParseResult::success(1, b'7'));
        assert_eq!(alphanumeric().parse(b"-"), ParseResult::fail(0));
    }

    #[test]
    fn test_classes_at_end_of_input() {
        for parser in [letter(), digit(), whitespace(), alphanumeric()] {
            assert_eq!(parser.parse(b""), ParseResult::fail(0));
            assert_eq!(parser.parse_at(b"a1 ", 3), ParseResult::fail(3));
        }
    }
}
