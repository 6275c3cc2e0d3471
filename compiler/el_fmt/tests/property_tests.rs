//! Property-based tests for the printer.
//!
//! Random expressions are generated as source text and checked for:
//! 1. Parse-ability: printed output re-parses
//! 2. Idempotence: print(parse(print(e))) == print(e)
//! 3. Shape: the re-parsed tree has the same number of nodes

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use el_fmt::print_expr;
use el_parse::parse;
use proptest::prelude::*;

// -- Source Generation Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,6}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| el_lexer::keyword(s).is_none())
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|v| v.to_string()),
        any::<i64>().prop_map(|v| v.to_string()),
        (0u32..10_000, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        (0u32..100).prop_map(|v| format!("{v}.5f")),
        (0u32..0xFFFF).prop_map(|v| format!("0x{v:X}L")),
        "[a-z '\\\\]{0,8}".prop_map(|s| format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))),
        Just("null".to_owned()),
        Just("true".to_owned()),
        Just("false".to_owned()),
    ]
}

fn binary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "==", "!=", "<>", "<=>", "<", "<=", ">", ">=", "&&", "||",
        "contains", "startsWith", "endsWith",
    ])
}

fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![identifier_strategy(), literal_strategy()];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            (prop::sample::select(vec!["-", "!", "~", "+"]), inner.clone())
                .prop_map(|(op, e)| format!("{op}({e})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, y, n)| format!("({c}) ? ({y}) : ({n})")),
            (inner.clone(), identifier_strategy()).prop_map(|(o, n)| format!("({o}).{n}")),
            (inner.clone(), inner.clone()).prop_map(|(t, i)| format!("({t})[{i}]")),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (identifier_strategy(), identifier_strategy(), prop::collection::vec(inner, 0..3))
                .prop_map(|(p, f, args)| format!("{p}:{f}({})", args.join(", "))),
        ]
    })
}

fn print(source: &str) -> (String, usize) {
    let parsed = parse(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    (
        print_expr(&parsed.arena, &parsed.symbols, parsed.root),
        parsed.arena.len(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn printed_output_round_trips(source in expr_strategy()) {
        let (first, nodes) = print(&source);
        let (second, reparsed_nodes) = print(&first);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(nodes, reparsed_nodes);
    }
}
