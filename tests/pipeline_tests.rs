//! End-to-end tests for the text → tokens → tree pipeline
//! Demonstrates: Scanner → Parser working together over the struct API.

use lispish::{Node, Parser, Scanner, TokenKind};

fn parse_source(source: &str) -> Node {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();

    let mut parser = Parser::new(tokens);
    parser.parse().unwrap()
}

fn collect_leaf_texts<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    if let Some(text) = node.text() {
        out.push(text);
    }
    for child in node.children() {
        collect_leaf_texts(child, out);
    }
}

/// Depth-first leaf texts with the structural parentheses dropped.
fn atom_texts(node: &Node) -> Vec<&str> {
    let mut leaves = Vec::new();
    collect_leaf_texts(node, &mut leaves);
    leaves
        .into_iter()
        .filter(|text| *text != "(" && *text != ")")
        .collect()
}

#[test]
fn test_leaves_reproduce_token_sequence() {
    let source = "(+ 3.14 (* 4 7))";

    let tokens = Scanner::new(source).scan_tokens().unwrap();
    let tree = parse_source(source);

    let mut leaves = Vec::new();
    collect_leaf_texts(&tree, &mut leaves);

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(leaves, lexemes);
}

#[test]
fn test_atom_round_trip() {
    let tree = parse_source(r#"(define foo "bananas") (+ 3.14 (* 4 7))"#);
    assert_eq!(
        atom_texts(&tree),
        vec!["define", "foo", "\"bananas\"", "+", "3.14", "*", "4", "7"]
    );
}

#[test]
fn test_deeply_nested_lists() {
    let depth = 64;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse_source(&source);
    assert_eq!(atom_texts(&tree), vec!["x"]);
}

#[test]
fn test_string_atom_keeps_escapes_through_pipeline() {
    let source = r#"(define foo "Say \"Cheese!\" ")"#;
    let tree = parse_source(source);
    assert_eq!(
        atom_texts(&tree),
        vec!["define", "foo", r#""Say \"Cheese!\" ""#]
    );
}

#[test]
fn test_tree_display_lists_every_token() {
    let rendered = parse_source("(+ 3 4)").to_string();
    for expected in ["Program", "SExpr", "List", "Seq", "Atom", "LITERAL"] {
        assert!(rendered.contains(expected), "missing {expected}:\n{rendered}");
    }
    // One line per node: 1 Program + 1 SExpr + 1 List + 3 Seq + 3 (SExpr,
    // Atom, leaf) triples + 2 paren leaves.
    assert_eq!(rendered.lines().count(), 17);
}

#[test]
fn test_tree_serializes_to_json() {
    let tree = parse_source("(a 1)");
    let json = serde_json::to_string(&tree).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_lex_failure_reports_before_parse() {
    let mut scanner = Scanner::new("(+ 3 \"oops");
    let err = scanner.scan_tokens().unwrap_err();
    assert!(err.is_lex_error());
}

#[test]
fn test_token_kind_survives_into_leaf() {
    let tree = parse_source("42");
    let atom = &tree.children()[0].children()[0];
    let leaf = &atom.children()[0];
    assert_eq!(leaf.kind_name(), TokenKind::Int.name());
}
