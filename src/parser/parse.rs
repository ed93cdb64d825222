//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core infrastructure:
//! the parse error type, cursor snapshot helpers, the literal-token
//! recognizer primitive, the recursion-depth guard, and the top-level
//! `program` rule.  The grammar recognizers are split across two sibling
//! modules as `impl Parser` blocks:
//! - `statements`: lines, labels, statements, line lists
//! - `expressions`: identifiers, numbers, expressions, booleans
//!
//! # Backtracking discipline
//!
//! Tokens are pulled lazily from the [`Lexer`]; there is no token buffer.
//! Every recognizer that can fail snapshots the scan cursor on entry and
//! restores it on every failing path, so alternatives always start from
//! the same position and nothing a failed attempt consumed leaks out of
//! it.  Rules that always succeed (the epsilon productions) follow the
//! same discipline for their optional part: a partial match is rewound in
//! full before the rule reports its empty success.

use crate::parser::lexer::{Lexer, SourceLocation};
use crate::parser::tree::{Rule, TreeNode};
use rustc_hash::FxHashSet;
use std::fmt;

/// Keywords that are grammar vocabulary and can never be identifiers.
pub(crate) const RESERVED_WORDS: [&str; 10] = [
    "if", "while", "read", "write", "goto", "gosub", "return", "break", "end", "endwhile",
];

/// Ceiling for the recursive rules.  Nesting past this depth is rejected
/// instead of being allowed to overflow the call stack.
const MAX_DEPTH: usize = 512;

/// Parser error type
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Text of the token under the cursor where the grammar gave up;
    /// empty when that position is end of input.
    pub token: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token.is_empty() {
            write!(
                f,
                "Parse error at line {}, column {}: unexpected end of input",
                self.location.line, self.location.column
            )
        } else {
            write!(
                f,
                "Parse error at line {}, column {}: unexpected token '{}'",
                self.location.line, self.location.column, self.token
            )
        }
    }
}

impl std::error::Error for ParseError {}

/// Backtracking recursive descent recognizer for the line language.
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) reserved: FxHashSet<&'static str>,
    depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let mut reserved = FxHashSet::default();
        reserved.extend(RESERVED_WORDS);
        Self {
            lexer: Lexer::new(source),
            reserved,
            depth: 0,
        }
    }

    /// Recognize a whole program: a line list closed by the literal `$$`.
    ///
    /// On acceptance returns the completed parse tree.  On rejection the
    /// error carries the token under the final cursor position; input
    /// after a matched `$$` is not examined.
    pub fn parse(&mut self) -> Result<TreeNode, ParseError> {
        let mut root = TreeNode::new(Rule::Program);
        if self.match_line_list(&mut root) && self.match_literal(&mut root, "$$") {
            Ok(root)
        } else {
            Err(self.syntax_error())
        }
    }

    // ===== Helper methods =====

    /// Snapshot the scan cursor for a later [`restore`](Self::restore).
    pub(crate) fn snapshot(&self) -> usize {
        self.lexer.mark()
    }

    /// Rewind the scan cursor to an earlier snapshot.
    pub(crate) fn restore(&mut self, snapshot: usize) {
        self.lexer.reset(snapshot);
    }

    /// Recognize one literal token with the exact expected spelling.
    ///
    /// Attaches a `TOKEN` leaf to `parent` on match; restores the cursor
    /// and leaves `parent` untouched otherwise.
    pub(crate) fn match_literal(&mut self, parent: &mut TreeNode, expected: &str) -> bool {
        let start = self.snapshot();
        let token = self.lexer.next_token();
        if token.text == expected {
            parent.attach(TreeNode::leaf(Rule::Token, token.text));
            true
        } else {
            self.restore(start);
            false
        }
    }

    /// Run `rule` one nesting level deeper.  Past [`MAX_DEPTH`] the rule
    /// fails without running, which surfaces as an ordinary rejection.
    pub(crate) fn nested(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.depth >= MAX_DEPTH {
            return false;
        }
        self.depth += 1;
        let matched = rule(self);
        self.depth -= 1;
        matched
    }

    /// Build the rejection report: the token under the final cursor
    /// position, plus its line and column.
    fn syntax_error(&mut self) -> ParseError {
        let token = self.lexer.next_token();
        self.lexer.unread(&token);
        ParseError {
            location: self.lexer.location(),
            token: token.text,
        }
    }
}
