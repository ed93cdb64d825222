//! Statement- and line-level recognizers
//!
//! This module extends [`Parser`] with the upper half of the grammar:
//!
//! ```text
//! program  ::= linelist "$$"
//! linelist ::= line linelist | ε
//! line     ::= label stmt linetail
//! linetail ::= ";" stmt | ε
//! label    ::= id ":" | ε
//! stmt     ::= id "=" expr
//!            | "if" "(" boolean ")" stmt
//!            | "while" "(" boolean ")" linelist "endwhile"
//!            | ("read" | "goto" | "gosub") id
//!            | "write" expr
//!            | "return" | "break" | "end"
//! ```
//!
//! A line starting with an identifier is ambiguous between a label
//! (`foo:`) and an assignment (`foo=1`).  The line rule tries the label
//! reading first under a full cursor snapshot; when the `:` is missing
//! the identifier is given back whole and the statement rule retries it
//! from the same position.

use crate::parser::parse::Parser;
use crate::parser::tree::{Rule, TreeNode};

impl Parser {
    /// linelist: zero or more lines, right-recursive.  Always succeeds;
    /// attaches a child only when at least one line matched.
    pub(crate) fn match_line_list(&mut self, parent: &mut TreeNode) -> bool {
        let mut node = TreeNode::new(Rule::LineList);
        if self.match_line(&mut node) && self.match_line_list(&mut node) {
            parent.attach(node);
        }
        true
    }

    /// line: optional label, a statement, optional `;`-statement tail.
    /// Fails only when the statement fails, since the other two parts are
    /// epsilon productions.
    pub(crate) fn match_line(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let mut node = TreeNode::new(Rule::Line);
        if self.match_label(&mut node)
            && self.match_statement(&mut node)
            && self.match_line_tail(&mut node)
        {
            parent.attach(node);
            true
        } else {
            // A matched label is given back too: `foo:` with nothing
            // statement-shaped after it is not a line.
            self.restore(start);
            false
        }
    }

    /// linetail: optional `;` followed by a statement.  Always succeeds;
    /// a `;` with no statement after it is rewound in full.
    pub(crate) fn match_line_tail(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let mut node = TreeNode::new(Rule::LineTail);
        if self.match_literal(&mut node, ";") && self.match_statement(&mut node) {
            parent.attach(node);
        } else {
            self.restore(start);
        }
        true
    }

    /// label: optional `id ":"`.  Always succeeds.  When the identifier
    /// matches but the `:` does not follow, both are given back so the
    /// statement rule can try the identifier from the same position.
    pub(crate) fn match_label(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let mut node = TreeNode::new(Rule::Label);
        if self.match_identifier(&mut node) && self.match_literal(&mut node, ":") {
            parent.attach(node);
        } else {
            self.restore(start);
        }
        true
    }

    /// stmt: dispatched on the leading token; see the module grammar.
    pub(crate) fn match_statement(&mut self, parent: &mut TreeNode) -> bool {
        self.nested(|p| p.statement(parent))
    }

    fn statement(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();

        // Assignment.  A leading identifier can begin nothing else here,
        // so when the `=` or the expression is missing the whole rule
        // fails without trying the keyword branches (the line rule has
        // already tried the label reading of the same identifier).
        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_identifier(&mut node) {
            if self.match_literal(&mut node, "=") && self.match_expression(&mut node) {
                parent.attach(node);
                return true;
            }
            self.restore(start);
            return false;
        }

        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_literal(&mut node, "if") {
            if self.match_literal(&mut node, "(")
                && self.match_boolean(&mut node)
                && self.match_literal(&mut node, ")")
                && self.match_statement(&mut node)
            {
                parent.attach(node);
                return true;
            }
            self.restore(start);
            return false;
        }

        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_literal(&mut node, "while") {
            if self.match_literal(&mut node, "(")
                && self.match_boolean(&mut node)
                && self.match_literal(&mut node, ")")
                && self.match_line_list(&mut node)
                && self.match_literal(&mut node, "endwhile")
            {
                parent.attach(node);
                return true;
            }
            self.restore(start);
            return false;
        }

        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_literal(&mut node, "read")
            || self.match_literal(&mut node, "goto")
            || self.match_literal(&mut node, "gosub")
        {
            if self.match_identifier(&mut node) {
                parent.attach(node);
                return true;
            }
            self.restore(start);
            return false;
        }

        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_literal(&mut node, "write") {
            if self.match_expression(&mut node) {
                parent.attach(node);
                return true;
            }
            self.restore(start);
            return false;
        }

        let mut node = TreeNode::new(Rule::Stmt);
        if self.match_literal(&mut node, "return")
            || self.match_literal(&mut node, "break")
            || self.match_literal(&mut node, "end")
        {
            parent.attach(node);
            return true;
        }

        false
    }
}
