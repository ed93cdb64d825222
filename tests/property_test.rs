// Property-based tests for the recognizer
//
// Valid programs are generated as token lists straight from the grammar,
// joined with spaces, and must round-trip: the terminal texts of the
// accepted tree, in order, are exactly the generated tokens.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use minilang::parser::parse::Parser;

/// Identifier tokens.  The ten keywords are excluded because they are
/// reserved, `true`/`false` because the boolean rule would claim them
/// before an expression could.
fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("reserved or boolean literal", |s| {
        !matches!(
            s.as_str(),
            "if" | "while"
                | "read"
                | "write"
                | "goto"
                | "gosub"
                | "return"
                | "break"
                | "end"
                | "endwhile"
                | "true"
                | "false"
        )
    })
}

/// A number atom: optional sign, then digits.
fn number_tokens() -> impl Strategy<Value = Vec<String>> {
    (prop::option::of(prop_oneof![Just("+"), Just("-")]), "[0-9]{1,4}").prop_map(
        |(sign, digits)| {
            let mut tokens = Vec::new();
            if let Some(sign) = sign {
                tokens.push(sign.to_string());
            }
            tokens.push(digits);
            tokens
        },
    )
}

fn atom_tokens() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![ident().prop_map(|id| vec![id]), number_tokens()]
}

/// Expression token lists, shaped exactly like the grammar: an atom with
/// an operator tail, or a parenthesized expression.  The left side of a
/// binary form is always an atom because the parenthesized form carries
/// no tail.
fn expr_tokens() -> impl Strategy<Value = Vec<String>> {
    atom_tokens().prop_recursive(3, 24, 2, |inner| {
        prop_oneof![
            (
                atom_tokens(),
                prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")],
                inner.clone(),
            )
                .prop_map(|(mut lhs, op, rhs)| {
                    lhs.push(op.to_string());
                    lhs.extend(rhs);
                    lhs
                }),
            inner.prop_map(|e| {
                let mut tokens = vec!["(".to_string()];
                tokens.extend(e);
                tokens.push(")".to_string());
                tokens
            }),
        ]
    })
}

fn boolean_tokens() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        Just(vec!["true".to_string()]),
        Just(vec!["false".to_string()]),
        (
            expr_tokens(),
            prop_oneof![Just(">"), Just("<"), Just(">="), Just("<="), Just("<>"), Just("=")],
            expr_tokens(),
        )
            .prop_map(|(mut lhs, op, rhs)| {
                lhs.push(op.to_string());
                lhs.extend(rhs);
                lhs
            }),
    ]
}

fn stmt_tokens() -> impl Strategy<Value = Vec<String>> {
    let simple = prop_oneof![
        (ident(), expr_tokens()).prop_map(|(id, expr)| {
            let mut tokens = vec![id, "=".to_string()];
            tokens.extend(expr);
            tokens
        }),
        (prop_oneof![Just("read"), Just("goto"), Just("gosub")], ident())
            .prop_map(|(keyword, id)| vec![keyword.to_string(), id]),
        expr_tokens().prop_map(|expr| {
            let mut tokens = vec!["write".to_string()];
            tokens.extend(expr);
            tokens
        }),
        prop_oneof![Just("return"), Just("break"), Just("end")]
            .prop_map(|keyword| vec![keyword.to_string()]),
    ];
    simple.prop_recursive(2, 12, 1, |inner| {
        prop_oneof![
            (boolean_tokens(), inner.clone()).prop_map(|(cond, body)| {
                let mut tokens = vec!["if".to_string(), "(".to_string()];
                tokens.extend(cond);
                tokens.push(")".to_string());
                tokens.extend(body);
                tokens
            }),
            (boolean_tokens(), inner).prop_map(|(cond, body)| {
                let mut tokens = vec!["while".to_string(), "(".to_string()];
                tokens.extend(cond);
                tokens.push(")".to_string());
                tokens.extend(body);
                tokens.push("endwhile".to_string());
                tokens
            }),
        ]
    })
}

/// A line: optional label, a statement, optional `;` statement tail.
fn line_tokens() -> impl Strategy<Value = Vec<String>> {
    (
        prop::option::of(ident()),
        stmt_tokens(),
        prop::option::of(stmt_tokens()),
    )
        .prop_map(|(label, stmt, tail)| {
            let mut tokens = Vec::new();
            if let Some(label) = label {
                tokens.push(label);
                tokens.push(":".to_string());
            }
            tokens.extend(stmt);
            if let Some(tail) = tail {
                tokens.push(";".to_string());
                tokens.extend(tail);
            }
            tokens
        })
}

fn program_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_tokens(), 0..4).prop_map(|lines| {
        let mut tokens: Vec<String> = lines.into_iter().flatten().collect();
        tokens.push("$$".to_string());
        tokens
    })
}

proptest! {
    #[test]
    fn prop_no_panic_on_arbitrary_input(input in "[ -~\\t\\n]{0,128}") {
        let _ = Parser::new(&input).parse();
    }

    #[test]
    fn prop_generated_programs_round_trip(tokens in program_tokens()) {
        let source = tokens.join(" ");
        let tree = Parser::new(&source)
            .parse()
            .map_err(|e| TestCaseError::fail(format!("rejected {:?}: {}", source, e)))?;
        let terminals: Vec<String> =
            tree.terminals().iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(terminals, tokens);
    }

    #[test]
    fn prop_accepted_trees_end_with_the_terminator(tokens in program_tokens()) {
        let source = tokens.join(" ");
        if let Ok(tree) = Parser::new(&source).parse() {
            prop_assert_eq!(tree.terminals().last().copied(), Some("$$"));
        }
    }

    #[test]
    fn prop_rejections_carry_a_one_based_location(input in "[a-z0-9+*/<>=();:$ ]{0,64}") {
        if let Err(err) = Parser::new(&input).parse() {
            prop_assert!(err.location.line >= 1);
            prop_assert!(err.location.column >= 1);
        }
    }
}
