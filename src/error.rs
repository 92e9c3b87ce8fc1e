use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A position inside a piece of input, used to render failures
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code [u8],
    /// The position in `code` where the failing parser started
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code [u8], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'code [u8] {
        self.code
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offset rather than column: the input is a plain byte sequence
    /// and carries no encoding or tab-width information.
    pub fn readable_position(&self) -> ReadablePosition {
        let end = self.loc.min(self.code.len());
        let mut line = 1;
        let mut line_start = 0;

        for (i, &byte) in self.code[..end].iter().enumerate() {
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the failing line, with a pointer
    /// under the failure position
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split(|&byte| byte == b'\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, String::from_utf8_lossy(content)));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "No match at line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The single failure kind: nothing matched at `loc`
///
/// Produced by [`crate::ParseResult::into_result`] for callers who want to
/// use `?` or print a located message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{loc}")]
pub struct NoMatch<'code> {
    loc: CodeLoc<'code>,
}

impl<'code> NoMatch<'code> {
    pub fn new(loc: CodeLoc<'code>) -> Self {
        NoMatch { loc }
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    pub fn position(&self) -> usize {
        self.loc.position()
    }
}
