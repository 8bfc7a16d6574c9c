use std::{fmt, sync::Arc};

/// A location inside a named source text.
///
/// While owned by the lexer a `Position` is a moving cursor; every token keeps
/// its own clone, so later advancement never changes a recorded location.
/// `line` and `column` are 0-based and `index` is a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Byte offset of the character this position points at.
    pub index:    usize,
    /// Line number, starting at 0.
    pub line:     usize,
    /// Column number, starting at 0.
    pub column:   usize,
    filename:     Arc<str>,
    source:       Arc<str>,
}

impl Position {
    /// Creates a cursor pointing at the first character of `source`.
    ///
    /// ## Example
    /// ```
    /// use linecalc::interpreter::position::Position;
    ///
    /// let pos = Position::new("stdin", "1 + 2");
    /// assert_eq!(pos.to_string(), "line 0, col 0 in file stdin");
    /// ```
    #[must_use]
    pub fn new(filename: &str, source: &str) -> Self {
        Self { index:    0,
               line:     0,
               column:   0,
               filename: Arc::from(filename),
               source:   Arc::from(source), }
    }

    /// Moves past `current`, wrapping to the next line after a newline.
    ///
    /// ## Example
    /// ```
    /// use linecalc::interpreter::position::Position;
    ///
    /// let mut pos = Position::new("f", "a\nb");
    /// pos.advance('a');
    /// assert_eq!((pos.line, pos.column), (0, 1));
    /// pos.advance('\n');
    /// assert_eq!((pos.line, pos.column), (1, 0));
    /// ```
    pub fn advance(&mut self, current: char) {
        self.index += current.len_utf8();
        self.column += 1;

        if current == '\n' {
            self.column = 0;
            self.line += 1;
        }
    }

    /// Advances character by character until `index` reaches `offset`.
    ///
    /// Offsets behind the cursor or past the end of the source are clamped.
    pub fn advance_to(&mut self, offset: usize) {
        let end = offset.min(self.source.len());
        if end <= self.index {
            return;
        }
        let source = Arc::clone(&self.source);
        for ch in source[self.index..end].chars() {
            self.advance(ch);
        }
    }

    /// The complete source text this position refers to.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The full text of the line this position lies on, without its newline.
    #[must_use]
    pub fn line_text(&self) -> &str {
        self.source.lines().nth(self.line).unwrap_or("")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {} in file {}", self.line, self.column, self.filename)
    }
}
