use std::{fs, path::Path};

use pebble::{
    ast::{BinaryOperator, Expr},
    interpreter::lexer::tokenize_all,
    token_listing,
};
use walkdir::WalkDir;

#[test]
fn script_listings_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "pb"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("tokens")).unwrap_or_else(|e| {
                           panic!("Missing token listing for {path:?}: {e}")
                       });

        count += 1;
        match token_listing(&source) {
            Ok(listing) => assert_eq!(listing, expected, "Token listing of {path:?} differs"),
            Err(e) => panic!("Script {path:?} failed to tokenize:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Builds a tree from a flat `operand (operator operand)*` expression,
/// folding left to right without precedence.
fn fold(src: &str) -> Expr {
    let tokens = tokenize_all(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    let mut iter = tokens.iter();

    let operand = |token: Option<&pebble::interpreter::lexer::Token<'_>>| {
        let token = token.expect("missing operand");
        let value = token.literal_value()
                         .expect("invalid literal")
                         .unwrap_or_else(|| panic!("{} is not a literal", token.text));
        Expr::variable(Expr::from(value))
    };

    let mut expr = operand(iter.next());
    while let Some(token) = iter.next() {
        let op = BinaryOperator::from_token(token.kind).unwrap_or_else(|| {
                     panic!("{} is not an operator", token.text)
                 });
        expr = Expr::binary(expr, op, operand(iter.next()));
    }
    expr
}

fn assert_renders(src: &str, expected: &str) {
    match fold(src).render() {
        Ok(text) => assert_eq!(text, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(text) = fold(src).render() {
        panic!("Expression {src:?} succeeded with {text} but was expected to fail")
    }
}

#[test]
fn source_to_value() {
    assert_renders("2 + 3 * 4", "20");
    assert_renders("7 / 2", "3");
    assert_renders("1.5 + 2", "3.5");
    assert_renders("10 / 4.0", "2.5");
    assert_renders("'ab' * 3", "ababab");
    assert_renders("\"hello\" - 2", "hel");
    assert_renders("'total: ' + 4 + ' / ' + 0.5", "total: 4 / 0.5");
    assert_renders("\"\"\"x\"\"\" * 2.9 + 'y'", "xxy");
    assert_renders("3 == 3.0", "true");
    assert_renders("1 + 1 != 2", "false");
    assert_renders("true == false", "false");
}

#[test]
fn source_failures() {
    assert_failure("true + 1");
    assert_failure("'hi' - 5");
    assert_failure("3 == '3'");
    assert_failure("'a' / 2");
    assert_failure("1 / 0");
    assert_failure("2 * 3 + false");
}

#[test]
fn script_file_tokenizes() {
    let script = fs::read_to_string(Path::new("tests/scripts/numbers.pb")).expect("missing file");
    let tokens = tokenize_all(&script).expect("script should tokenize");
    assert_eq!(tokens.len(), 15);
}
