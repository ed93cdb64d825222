//! # Introduction
//!
//! minilang recognizes a small line-oriented imperative language: a program
//! is a list of optionally labeled lines closed by the literal `$$`, each
//! line holding a statement (assignment, `if`, `while`, `read`, `write`,
//! `goto`, `gosub`, `return`, `break`, `end`) with an optional `;`-joined
//! second statement.  On acceptance the recognizer hands back a parse tree
//! whose shape mirrors the grammar's productions; on rejection it reports
//! the token under the cursor where the grammar gave up.
//!
//! ## Recognition pipeline
//!
//! ```text
//! Source → Lexer (lazy, on demand) → grammar recognizers → parse tree
//! ```
//!
//! 1. [`parser::lexer`] — scans one token at a time from an in-memory
//!    buffer; there is no separate tokenization pass.
//! 2. [`parser::parse`] — the backtracking recursive-descent engine; every
//!    grammar rule snapshots the scan cursor on entry and restores it on
//!    every failing path.
//! 3. [`parser::tree`] — single-owner parse tree nodes with an indented
//!    `Display` rendering.
//!
//! The `minilang` binary is a thin driver: it reads each file named on the
//! command line, runs the recognizer, and prints the tree dump or the
//! parse error.

pub mod parser;
