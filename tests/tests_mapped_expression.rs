//! Mapped expression classification and field extraction

use mapped_expr::{ExpressionKind, MappedExpression, Problem};
use rstest::rstest;

// ============================================================================
// End-to-end examples
// ============================================================================

#[test]
fn test_plain_key() {
    let expr = MappedExpression::parse("&{user.name}");

    assert_eq!(expr.kind(), ExpressionKind::Normal);
    assert!(expr.is_valid());
    assert_eq!(expr.mapped_key(), Some("user.name"));
    assert!(!expr.is_optional());
    assert!(!expr.is_ternary());
    assert!(!expr.is_iterated());
    assert_eq!(expr.pipe_functions(), None);
}

#[test]
fn test_optional_piped_ternary() {
    let expr = MappedExpression::parse(r#"&{*(trim) user.email ? "yes" : "no"}"#);

    assert!(expr.is_valid(), "{:?}", expr.invalid_expr_msg());
    assert!(expr.is_optional());
    assert_eq!(expr.pipe_functions().unwrap(), ["trim"]);
    assert_eq!(expr.mapped_key(), Some("user.email"));
    assert!(expr.is_ternary());
    assert_eq!(expr.ternary_true(), Some("yes"));
    assert_eq!(expr.ternary_false(), Some("no"));
}

#[test]
fn test_iterated() {
    let expr = MappedExpression::parse("&{#items}");

    assert_eq!(expr.kind(), ExpressionKind::Iterated);
    assert!(expr.is_iterated());
    assert_eq!(expr.mapped_key(), Some("items"));
}

#[test]
fn test_lone_ternary_marker_reports_missing_key() {
    let expr = MappedExpression::parse("&{?}");

    assert_eq!(expr.kind(), ExpressionKind::Invalid);
    let diagnostic = expr.invalid_expr_msg().unwrap();
    assert_eq!(
        diagnostic.problem.message(),
        "Didn't find a mappedKey in the mapped expression"
    );
    assert_eq!((diagnostic.line_num, diagnostic.col_num), (1, 1));
}

// ============================================================================
// Properties
// ============================================================================

#[rstest]
#[case("&{#items}", "items")]
#[case("&{#order.lines}", "order.lines")]
#[case("&{#row_2}", "row_2")]
#[case("&{#.}", ".")]
fn test_iterated_carries_only_a_key(#[case] input: &str, #[case] key: &str) {
    let expr = MappedExpression::parse(input);

    assert!(expr.is_valid());
    assert!(expr.is_iterated());
    assert_eq!(expr.mapped_key(), Some(key));
    assert_eq!(expr.pipe_functions(), None);
    assert!(!expr.is_ternary());
    assert_eq!(expr.ternary_true(), None);
    assert_eq!(expr.ternary_false(), None);
    assert!(!expr.is_optional());
}

#[rstest]
#[case("&{*key}", true)]
#[case("&{* key}", true)]
#[case("&{*(trim)key}", true)]
#[case(r#"&{*key ? "a"}"#, true)]
#[case("&{key}", false)]
#[case("&{ key }", false)]
#[case("&{(trim) key}", false)]
fn test_optional_marker(#[case] input: &str, #[case] optional: bool) {
    let expr = MappedExpression::parse(input);
    assert!(expr.is_valid(), "{} should be valid", input);
    assert_eq!(expr.is_optional(), optional, "{}", input);
}

#[rstest]
#[case("&{k ?}")]
#[case("&{k?}")]
#[case(r#"&{k ? : "no"}"#)]
#[case("&{k ? : 'no'}")]
#[case(r#"&{*(trim) k ? "" : "no"}"#)]
fn test_ternary_without_true_value(#[case] input: &str) {
    let expr = MappedExpression::parse(input);

    assert!(!expr.is_valid());
    assert!(expr.is_ternary());
    assert_eq!(
        expr.invalid_expr_msg().map(|d| d.problem),
        Some(Problem::MissingTernaryTrue),
        "{}",
        input
    );
}

#[rstest]
#[case("(trim,upper,lower)", vec!["trim", "upper", "lower"])]
#[case("(trim)", vec!["trim"])]
#[case("(a_1,B2)", vec!["a_1", "B2"])]
fn test_pipe_functions_keep_declared_order(#[case] list: &str, #[case] expected: Vec<&str>) {
    let expr = MappedExpression::parse(&format!("&{{{} value}}", list));
    let names: Vec<&str> = expr
        .pipe_functions()
        .unwrap()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_double_quoted_literal_wins_over_single() {
    let expr = MappedExpression::parse(r#"&{flag ? "double" 'single' : "yes" 'no'}"#);

    assert!(expr.is_valid());
    assert_eq!(expr.ternary_true(), Some("double"));
    assert_eq!(expr.ternary_false(), Some("yes"));
}

#[rstest]
#[case(r#"&{k ? "in stock" : "sold out"}"#, Some("in stock"), Some("sold out"))]
#[case("&{k ? 'y'}", Some("y"), None)]
#[case(r#"&{k ? "y" ""}"#, Some("y"), Some(""))]
#[case(r#"&{k?"a":"b"}"#, Some("a"), Some("b"))]
fn test_ternary_branches(
    #[case] input: &str,
    #[case] when_true: Option<&str>,
    #[case] when_false: Option<&str>,
) {
    let expr = MappedExpression::parse(input);
    assert!(expr.is_valid(), "{} should be valid", input);
    assert_eq!(expr.ternary_true(), when_true);
    assert_eq!(expr.ternary_false(), when_false);
}

#[rstest]
#[case("&{user-name}")]
#[case("&{ *key}")]
#[case("&{key (trim)}")]
#[case("&{?key}")]
#[case("&{#key?}")]
#[case("&{# key}")]
#[case("&{#key }")]
#[case("&{#(trim)key}")]
#[case("&{*#key}")]
#[case("&{(a b)key}")]
#[case("&{\tkey}")]
#[case(r#"&{k ? "a!" }"#)]
#[case(r#"&{k ? "a" "b" "c"}"#)]
#[case("&{a &{b}")]
fn test_invalid_syntax(#[case] input: &str) {
    let expr = MappedExpression::parse(input);

    assert_eq!(expr.kind(), ExpressionKind::Invalid, "{}", input);
    let diagnostic = expr.invalid_expr_msg().unwrap();
    assert_eq!(diagnostic.problem, Problem::InvalidSyntax);
    assert_eq!(diagnostic.problem.message(), "Invalid Syntax");
    assert_eq!(diagnostic.expr, input);
    assert!(!diagnostic.code.is_missing_data());
    assert_eq!(expr.mapped_key(), None);
}

#[rstest]
#[case("&{}")]
#[case("&{*}")]
#[case("&{ }")]
#[case("&{(trim)}")]
#[case("&{#}")]
fn test_missing_key(#[case] input: &str) {
    let expr = MappedExpression::parse(input);
    assert_eq!(
        expr.invalid_expr_msg().map(|d| d.problem),
        Some(Problem::MissingMappedKey),
        "{}",
        input
    );
}

#[test]
fn test_literals_without_ternary_are_ignored() {
    let expr = MappedExpression::parse(r#"&{key "a" : "b"}"#);

    assert!(expr.is_valid());
    assert!(!expr.is_ternary());
    assert_eq!(expr.ternary_true(), None);
    assert_eq!(expr.ternary_false(), None);
}
