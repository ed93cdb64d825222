//! Source text recognizer
//!
//! This module turns source text into a parse tree:
//! - [`lexer`]: lazy tokenization (source text → one token at a time)
//! - [`parse`]: the backtracking recursive-descent engine
//! - [`tree`]: parse tree node definitions and rendering
//!
//! # Recognized language
//!
//! A program is a list of lines terminated by the literal `$$`.  A line is
//! an optional `label:`, a statement, and an optional `; statement` tail.
//! Statements cover assignment, `if`, `while … endwhile`, `read`, `write`,
//! `goto`, `gosub`, `return`, `break`, and `end`; expressions are the four
//! arithmetic operators over identifiers, signed numbers, and parenthesized
//! subexpressions, and booleans compare two expressions or spell `true` /
//! `false` literally.
//!
//! # Parser Implementation
//!
//! Hand-written backtracking recursive descent.  Tokens are pulled on
//! demand rather than collected in a pass, so "give the token back" is a
//! cursor rewind; grammar rules snapshot the cursor on entry and restore
//! it on every failing path.  No external parser generator dependencies.
//!
//! The recognizer methods are split across `statements` and `expressions`
//! as `impl Parser` blocks, each extending the shared parser state.

pub mod lexer;
pub mod parse;
pub mod tree;

mod expressions;
mod statements;
