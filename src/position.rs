use std::fmt;
use std::sync::Arc;

/// A cursor into a source buffer, tracking the absolute character offset
/// together with the line and column used in diagnostics.
///
/// The pristine state sits *before* the first character (`offset == -1`);
/// a priming [`advance`](Self::advance) moves it onto offset 0. Lines are
/// 1-based. Columns are 0-based once scanning has begun and reset on every
/// newline, so the first character of any line is column 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Absolute character offset, `-1` before the first advance.
    pub offset: isize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (0-based, `-1` before the first advance).
    pub column: isize,
    /// Name of the originating source, e.g. a file path or `"<repl>"`.
    pub filename: Arc<str>,
    /// The full source text, shared read-only for diagnostic rendering.
    pub source: Arc<str>,
}

impl Position {
    /// Create a position just before the start of `source`.
    #[must_use]
    pub fn start(filename: &str, source: &str) -> Self {
        Self {
            offset: -1,
            line: 1,
            column: -1,
            filename: Arc::from(filename),
            source: Arc::from(source),
        }
    }

    /// Step one character forward.
    ///
    /// `left_behind` is the character the cursor is departing, `None` on
    /// the priming call. Leaving a newline behind bumps the line counter
    /// and resets the column, so the character after the newline sits at
    /// column 0. No bounds checking happens here; callers compare `offset`
    /// against the buffer length before dereferencing a character.
    pub fn advance(&mut self, left_behind: Option<char>) {
        self.offset += 1;
        self.column += 1;
        if left_behind == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Half-open range between two position snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priming_advance_lands_on_first_character() {
        let mut pos = Position::start("<test>", "abc");
        assert_eq!(pos.offset, -1);
        pos.advance(None);
        assert_eq!(pos.offset, 0);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn advance_increments_offset_and_column() {
        let mut pos = Position::start("<test>", "abc");
        pos.advance(None);
        pos.advance(Some('a'));
        pos.advance(Some('b'));
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn leaving_a_newline_resets_column() {
        let mut pos = Position::start("<test>", "a\nb");
        pos.advance(None);
        pos.advance(Some('a'));
        assert_eq!(pos.column, 1);
        pos.advance(Some('\n'));
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.offset, 2);
    }

    #[test]
    fn snapshot_is_independent_of_live_cursor() {
        let mut pos = Position::start("<test>", "abc");
        pos.advance(None);
        let snapshot = pos.clone();
        pos.advance(Some('a'));
        pos.advance(Some('b'));
        assert_eq!(snapshot.offset, 0);
        assert_eq!(snapshot.column, 0);
        assert_eq!(pos.offset, 2);
    }

    #[test]
    fn display_is_filename_line_column() {
        let mut pos = Position::start("calc.txt", "1");
        pos.advance(None);
        assert_eq!(pos.to_string(), "calc.txt:1:0");
    }
}
