use miette::SourceSpan;

/// Scan state for one evaluation: the source text, the byte offset of the
/// character under the cursor, and that character (`None` past the end).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            pos: 0,
            current: input.chars().next(),
        }
    }

    /// The character under the cursor, without consuming it.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Everything from the cursor to the end of the input.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves one character forward. At the end of input this is a no-op.
    pub fn advance(&mut self) {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
            self.current = self.rest().chars().next();
        }
    }

    /// Skips a run of spaces, then consumes `expected` if it is under the
    /// cursor. Only `' '` is skipped, never tabs or newlines.
    pub fn try_consume(&mut self, expected: char) -> bool {
        while self.current == Some(' ') {
            self.advance();
        }

        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the input continues with it. No spaces are skipped.
    pub fn try_consume_str(&mut self, literal: &str) -> bool {
        if literal.is_empty() || !self.rest().starts_with(literal) {
            return false;
        }
        for _ in literal.chars() {
            self.advance();
        }
        true
    }

    /// Consumes the maximal run of characters matching `pred` and returns it.
    pub fn take_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while matches!(self.current, Some(c) if pred(c)) {
            self.advance();
        }
        &self.source[start..self.pos]
    }

    /// Span from `start` up to the cursor.
    pub fn span_from(&self, start: usize) -> SourceSpan {
        (start, self.pos - start).into()
    }

    /// Span covering the character under the cursor, empty at the end of input.
    pub fn current_span(&self) -> SourceSpan {
        (self.pos, self.current.map_or(0, char::len_utf8)).into()
    }
}
