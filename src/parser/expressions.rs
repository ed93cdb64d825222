//! Expression-level recognizers
//!
//! This module extends [`Parser`] with the recognizers below the
//! statement level:
//!
//! ```text
//! expr    ::= (id | num) etail
//!           | "(" expr ")"
//! etail   ::= ("+" | "-" | "*" | "/") expr | ε
//! num     ::= numsign digits
//! numsign ::= "+" | "-" | ε
//! digits  ::= <number token>
//! id      ::= <identifier token that is not a reserved word>
//! boolean ::= "true" | "false" | expr bool_op expr
//! bool_op ::= ">" | "<" | ">=" | "<=" | "<>" | "="
//! ```
//!
//! Each recognizer attaches its subtree to the caller's node on success
//! and leaves both the node and the cursor untouched on failure.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;
use crate::parser::tree::{Rule, TreeNode};

impl Parser {
    /// id: one identifier token that is not a reserved word.
    pub(crate) fn match_identifier(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let token = self.lexer.next_token();
        if token.kind == TokenKind::Identifier && !self.reserved.contains(token.text.as_str()) {
            parent.attach(TreeNode::leaf(Rule::Id, token.text));
            true
        } else {
            self.restore(start);
            false
        }
    }

    /// digits: one number token.
    pub(crate) fn match_digits(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let token = self.lexer.next_token();
        if token.kind == TokenKind::Number {
            parent.attach(TreeNode::leaf(Rule::Digits, token.text));
            true
        } else {
            self.restore(start);
            false
        }
    }

    /// numsign: optional `+` or `-`.  Always succeeds; attaches a child
    /// only when a sign was present.
    pub(crate) fn match_number_sign(&mut self, parent: &mut TreeNode) -> bool {
        let mut node = TreeNode::new(Rule::NumSign);
        if self.match_literal(&mut node, "+") || self.match_literal(&mut node, "-") {
            parent.attach(node);
        }
        true
    }

    /// num: numsign digits.  When the digits are missing the rule fails,
    /// dropping the sign subtree and rewinding over a consumed sign.
    pub(crate) fn match_number(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let mut node = TreeNode::new(Rule::Num);
        if self.match_number_sign(&mut node) && self.match_digits(&mut node) {
            parent.attach(node);
            true
        } else {
            self.restore(start);
            false
        }
    }

    /// bool_op: one relational operator.  The alternatives consume
    /// independently, so their order does not affect acceptance.
    pub(crate) fn match_boolean_op(&mut self, parent: &mut TreeNode) -> bool {
        let mut node = TreeNode::new(Rule::BoolOp);
        if self.match_literal(&mut node, ">")
            || self.match_literal(&mut node, "<")
            || self.match_literal(&mut node, ">=")
            || self.match_literal(&mut node, "<=")
            || self.match_literal(&mut node, "<>")
            || self.match_literal(&mut node, "=")
        {
            parent.attach(node);
            true
        } else {
            false
        }
    }

    /// expr: an identifier or number atom followed by an optional
    /// operator tail, or a parenthesized expression.
    pub(crate) fn match_expression(&mut self, parent: &mut TreeNode) -> bool {
        self.nested(|p| p.expression(parent))
    }

    fn expression(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();

        let mut node = TreeNode::new(Rule::Expr);
        if (self.match_identifier(&mut node) || self.match_number(&mut node))
            && self.match_etail(&mut node)
        {
            parent.attach(node);
            return true;
        }

        // The atom attempt consumed nothing, so the parenthesized form
        // starts from the same position.
        let mut node = TreeNode::new(Rule::Expr);
        if self.match_literal(&mut node, "(")
            && self.match_expression(&mut node)
            && self.match_literal(&mut node, ")")
        {
            parent.attach(node);
            return true;
        }

        self.restore(start);
        false
    }

    /// etail: optional arithmetic operator followed by an expression.
    /// Always succeeds; an operator with no expression after it is
    /// rewound in full.
    pub(crate) fn match_etail(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();
        let mut node = TreeNode::new(Rule::Etail);
        if (self.match_literal(&mut node, "+")
            || self.match_literal(&mut node, "-")
            || self.match_literal(&mut node, "*")
            || self.match_literal(&mut node, "/"))
            && self.match_expression(&mut node)
        {
            parent.attach(node);
        } else {
            self.restore(start);
        }
        true
    }

    /// boolean: literal `true`/`false`, or a relational comparison of two
    /// expressions.
    pub(crate) fn match_boolean(&mut self, parent: &mut TreeNode) -> bool {
        let start = self.snapshot();

        let mut node = TreeNode::new(Rule::Boolean);
        if self.match_literal(&mut node, "true") || self.match_literal(&mut node, "false") {
            parent.attach(node);
            return true;
        }

        let mut node = TreeNode::new(Rule::Boolean);
        if self.match_expression(&mut node)
            && self.match_boolean_op(&mut node)
            && self.match_expression(&mut node)
        {
            parent.attach(node);
            return true;
        }

        self.restore(start);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> TreeNode {
        TreeNode::new(Rule::Program)
    }

    #[test]
    fn test_number_with_and_without_sign() {
        let mut parent = scratch();
        assert!(Parser::new("42").match_number(&mut parent));
        let num = &parent.children[0];
        assert_eq!(num.rule, Rule::Num);
        assert_eq!(num.children.len(), 1);
        assert_eq!(num.children[0].rule, Rule::Digits);

        let mut parent = scratch();
        assert!(Parser::new("-7").match_number(&mut parent));
        let num = &parent.children[0];
        assert_eq!(num.children[0].rule, Rule::NumSign);
        assert_eq!(num.children[0].children[0].text, "-");
        assert_eq!(num.children[1].text, "7");
    }

    #[test]
    fn test_number_fails_after_a_lone_sign() {
        let mut parser = Parser::new("+$$");
        let mut parent = scratch();
        let before = parser.snapshot();
        assert!(!parser.match_number(&mut parent));
        // The consumed sign is given back with the rest of the attempt.
        assert_eq!(parser.snapshot(), before);
        assert!(parent.children.is_empty());
    }

    #[test]
    fn test_expression_chains_through_etail() {
        let mut parser = Parser::new("x+1*2");
        let mut parent = scratch();
        assert!(parser.match_expression(&mut parent));
        let expr = &parent.children[0];
        assert_eq!(expr.rule, Rule::Expr);
        assert_eq!(expr.children[0].rule, Rule::Id);
        let etail = &expr.children[1];
        assert_eq!(etail.rule, Rule::Etail);
        assert_eq!(etail.children[0].text, "+");
        assert_eq!(etail.children[1].rule, Rule::Expr);
    }

    #[test]
    fn test_parenthesized_expression() {
        let mut parser = Parser::new("(x)");
        let mut parent = scratch();
        assert!(parser.match_expression(&mut parent));
        let expr = &parent.children[0];
        assert_eq!(expr.children[0].text, "(");
        assert_eq!(expr.children[1].rule, Rule::Expr);
        assert_eq!(expr.children[2].text, ")");
    }

    #[test]
    fn test_unclosed_parenthesis_restores_everything() {
        let mut parser = Parser::new("(x");
        let mut parent = scratch();
        let before = parser.snapshot();
        assert!(!parser.match_expression(&mut parent));
        assert_eq!(parser.snapshot(), before);
        assert!(parent.children.is_empty());
    }

    #[test]
    fn test_boolean_literals_and_comparisons() {
        let mut parent = scratch();
        assert!(Parser::new("true").match_boolean(&mut parent));
        assert_eq!(parent.children[0].children[0].text, "true");

        let mut parent = scratch();
        assert!(Parser::new("x<=10").match_boolean(&mut parent));
        let boolean = &parent.children[0];
        assert_eq!(boolean.children[0].rule, Rule::Expr);
        assert_eq!(boolean.children[1].rule, Rule::BoolOp);
        assert_eq!(boolean.children[1].children[0].text, "<=");
        assert_eq!(boolean.children[2].rule, Rule::Expr);
    }

    #[test]
    fn test_boolean_without_operator_fails() {
        let mut parser = Parser::new("x 1");
        let mut parent = scratch();
        let before = parser.snapshot();
        assert!(!parser.match_boolean(&mut parent));
        assert_eq!(parser.snapshot(), before);
    }

    #[test]
    fn test_etail_is_empty_before_a_non_operator() {
        let mut parser = Parser::new("; end");
        let mut parent = scratch();
        assert!(parser.match_etail(&mut parent));
        assert!(parent.children.is_empty());
    }
}
