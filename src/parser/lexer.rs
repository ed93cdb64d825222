//! Lexer (tokenizer) for minilang source text
//!
//! There is no separate tokenization pass: the parser pulls tokens on
//! demand with [`Lexer::next_token`] and rewinds the scan cursor through
//! [`Lexer::mark`]/[`Lexer::reset`] when a grammar rule does not pan out.
//! The cursor is the single source of truth for how much input has been
//! consumed.

use std::fmt;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input.  Scanning at the end keeps producing this.
    Eof,
    /// A maximal run of decimal digits.
    Number,
    /// An operator or punctuation run.
    Symbol,
    /// A letter followed by a maximal run of letters and digits.
    Identifier,
}

/// A single scanned token: its classification and the exact matched text.
///
/// The text is a copy; tokens carry no borrow of the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Number of characters the scanner consumed for this token.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

/// Source position for error reporting, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Cursor-bearing scanner over an in-memory source buffer.
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Snapshot the scan cursor for a later [`reset`](Self::reset).
    pub fn mark(&self) -> usize {
        self.cursor
    }

    /// Rewind the cursor to a snapshot taken earlier with
    /// [`mark`](Self::mark).
    pub fn reset(&mut self, mark: usize) {
        debug_assert!(mark <= self.cursor, "the cursor may only rewind");
        self.cursor = mark;
    }

    /// Give the most recently scanned token back, subtracting its length
    /// from the cursor.  Whitespace skipped in front of the token is not
    /// restored; use [`mark`](Self::mark)/[`reset`](Self::reset) to rewind
    /// through whitespace as well.
    pub fn unread(&mut self, token: &Token) {
        debug_assert!(token.len() <= self.cursor);
        self.cursor -= token.len();
    }

    /// Scan the next token, advancing the cursor past it.
    ///
    /// Whitespace in front of the token is consumed first.  Classification
    /// is by the first non-whitespace character: a letter starts an
    /// identifier, a digit starts a number, a paren stands alone, and any
    /// other character starts a maximal run of characters that are neither
    /// alphanumeric nor whitespace.  The run rule delivers `<=`, `<>` and
    /// `$$` as single tokens, and also merges adjacent unrelated symbols
    /// (including a paren inside such a run) — a simplification the
    /// grammar's vocabulary never runs into.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.cursor += 1;
        }

        let first = match self.peek() {
            Some(c) => c,
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                }
            }
        };

        if first.is_ascii_alphabetic() {
            Token {
                kind: TokenKind::Identifier,
                text: self.take_while(|c| c.is_ascii_alphanumeric()),
            }
        } else if first.is_ascii_digit() {
            Token {
                kind: TokenKind::Number,
                text: self.take_while(|c| c.is_ascii_digit()),
            }
        } else if first == '(' || first == ')' {
            self.cursor += 1;
            Token {
                kind: TokenKind::Symbol,
                text: first.to_string(),
            }
        } else {
            Token {
                kind: TokenKind::Symbol,
                text: self
                    .take_while(|c| !c.is_ascii_alphanumeric() && !c.is_ascii_whitespace()),
            }
        }
    }

    /// Line and column of the character under the cursor, 1-based.
    pub fn location(&self) -> SourceLocation {
        let mut line = 1;
        let mut column = 1;
        for &c in &self.input[..self.cursor] {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        SourceLocation::new(line, column)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.cursor;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.cursor += 1;
        }
        self.input[start..self.cursor].iter().collect()
    }
}
