//! Parse tree definitions
//!
//! The tree mirrors the grammar: one [`Rule`] per production, one
//! [`TreeNode`] per successful rule application.  Terminal captures
//! (identifiers, digit runs, literal tokens) carry their matched text;
//! nonterminal nodes carry an ordered list of owned children.

use std::fmt;

/// Grammar production tags, one per recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Program,
    LineList,
    Line,
    LineTail,
    Stmt,
    Expr,
    Etail,
    Boolean,
    Label,
    Num,
    BoolOp,
    NumSign,
    Digits,
    Id,
    Token,
}

impl Rule {
    /// Printable production name, as rendered in tree dumps.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Program => "PROGRAM",
            Rule::LineList => "LINELIST",
            Rule::Line => "LINE",
            Rule::LineTail => "LINETAIL",
            Rule::Stmt => "STMT",
            Rule::Expr => "EXPR",
            Rule::Etail => "ETAIL",
            Rule::Boolean => "BOOLEAN",
            Rule::Label => "LABEL",
            Rule::Num => "NUM",
            Rule::BoolOp => "BOOL_OP",
            Rule::NumSign => "NUMSIGN",
            Rule::Digits => "DIGITS",
            Rule::Id => "ID",
            Rule::Token => "TOKEN",
        }
    }
}

/// A node of the parse tree.
///
/// Ownership is strictly tree-shaped: children live in their parent's
/// vector, attaching a subtree is a move, and dropping a node drops
/// everything beneath it.  A recognizer that fails drops its local node,
/// so nothing built during the failed attempt survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub rule: Rule,
    /// Matched text for terminal captures; empty for nonterminals.
    pub text: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an empty nonterminal node.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a terminal leaf carrying matched text.
    pub fn leaf(rule: Rule, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Attach a finished subtree as the last child.
    pub fn attach(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Terminal texts of the tree in left-to-right order.
    ///
    /// Concatenated, these reproduce the token sequence the recognizer
    /// consumed, whitespace aside.
    pub fn terminals(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals<'a>(&'a self, out: &mut Vec<&'a str>) {
        if !self.text.is_empty() {
            out.push(self.text.as_str());
        }
        for child in &self.children {
            child.collect_terminals(out);
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        for _ in 0..level {
            f.write_str("-   ")?;
        }
        if self.text.is_empty() {
            writeln!(f, "{}", self.rule.name())?;
        } else {
            writeln!(f, "{} {}", self.rule.name(), self.text)?;
        }
        for child in &self.children {
            child.write_indented(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeNode {
    /// Indented dump, one node per line, children one level deeper.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
