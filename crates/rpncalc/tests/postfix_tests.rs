use pretty_assertions::assert_eq;
use rpncalc::*;

// Helper to convert an infix string to space-separated postfix
fn rpn(src: &str) -> Result<String> {
    format_postfix(to_postfix(src.as_bytes(), &EvalContext::default()))
}

fn rpn_strict(src: &str) -> Result<String> {
    format_postfix(to_postfix(src.as_bytes(), &EvalContext::strict()))
}

// ═══════════════════════════════════════════════════════════════════════
// Precedence and Associativity
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_postfix_simple() {
    assert_eq!(rpn("1+2").unwrap(), "1 2 +");
}

#[test]
fn test_postfix_precedence() {
    assert_eq!(rpn("2+3*4").unwrap(), "2 3 4 * +");
    assert_eq!(rpn("2*3+4").unwrap(), "2 3 * 4 +");
}

#[test]
fn test_postfix_tokens() {
    let tokens: Result<Vec<Token>> =
        to_postfix("2+3*4".as_bytes(), &EvalContext::default()).collect();
    assert_eq!(
        tokens.unwrap(),
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            Token::Operator(Operator::Mul),
            Token::Operator(Operator::Add),
        ]
    );
}

#[test]
fn test_postfix_left_associative() {
    assert_eq!(rpn("1-2-3").unwrap(), "1 2 - 3 -");
    assert_eq!(rpn("8/4/2").unwrap(), "8 4 / 2 /");
    assert_eq!(rpn("1+2-3").unwrap(), "1 2 + 3 -");
    assert_eq!(rpn("2*3/4").unwrap(), "2 3 * 4 /");
}

#[test]
fn test_postfix_mixed() {
    assert_eq!(rpn("2+3*4-5").unwrap(), "2 3 4 * + 5 -");
}

#[test]
fn test_postfix_decimals() {
    assert_eq!(rpn("1.5 * 2.25").unwrap(), "1.5 2.25 *");
}

// ═══════════════════════════════════════════════════════════════════════
// Parentheses
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_postfix_parens() {
    assert_eq!(rpn("2+3*(4-5)").unwrap(), "2 3 4 5 - * +");
    assert_eq!(rpn("(2+3)*4").unwrap(), "2 3 + 4 *");
}

#[test]
fn test_postfix_nested_parens() {
    assert_eq!(rpn("((1+2)*(3-4))/5").unwrap(), "1 2 + 3 4 - * 5 /");
}

#[test]
fn test_postfix_redundant_parens() {
    assert_eq!(rpn("(((7)))").unwrap(), "7");
}

#[test]
fn test_postfix_empty() {
    assert_eq!(rpn("").unwrap(), "");
}

#[test]
fn test_postfix_unbalanced_close() {
    assert!(matches!(rpn("1+2)"), Err(EvalError::UnbalancedParenthesis)));
    assert!(matches!(rpn(")"), Err(EvalError::UnbalancedParenthesis)));
}

#[test]
fn test_postfix_unbalanced_open_is_flushed() {
    assert_eq!(rpn("(1+2").unwrap(), "1 2 + (");
}

#[test]
fn test_postfix_unbalanced_open_strict() {
    assert!(matches!(
        rpn_strict("(1+2"),
        Err(EvalError::UnbalancedParenthesis)
    ));
    assert_eq!(rpn_strict("(1+2)").unwrap(), "1 2 +");
}

// ═══════════════════════════════════════════════════════════════════════
// Iterator Behavior
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_postfix_numbers_pass_through_immediately() {
    let mut p = to_postfix("1 + 2".as_bytes(), &EvalContext::default());
    assert_eq!(p.next().unwrap().unwrap(), Token::Number(1.0));
    assert_eq!(p.operator_depth(), 0);
    assert_eq!(p.next().unwrap().unwrap(), Token::Number(2.0));
    assert_eq!(p.operator_depth(), 1);
    assert_eq!(p.next().unwrap().unwrap(), Token::Operator(Operator::Add));
    assert_eq!(p.operator_depth(), 0);
    assert!(p.next().is_none());
}

#[test]
fn test_postfix_fused_after_error() {
    let mut p = to_postfix("1 ) 2".as_bytes(), &EvalContext::default());
    assert_eq!(p.next().unwrap().unwrap(), Token::Number(1.0));
    assert!(matches!(p.next(), Some(Err(EvalError::UnbalancedParenthesis))));
    assert!(p.next().is_none());
    assert!(p.next().is_none());
}

#[test]
fn test_postfix_scan_error_propagates() {
    let err = rpn("1 + $").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Scan);
    assert!(matches!(err, EvalError::InvalidInput(ScanError::InvalidChar('$'))));
}

#[test]
fn test_postfix_long_open_paren_run() {
    let depth = 100_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(rpn(&src).unwrap(), "1");
}

#[test]
fn test_postfix_over_custom_token_source() {
    let tokens: Vec<std::result::Result<Token, ScanError>> = vec![
        Ok(Token::Number(4.0)),
        Ok(Token::Operator(Operator::Div)),
        Ok(Token::Number(2.0)),
    ];
    let p = Postfix::new(tokens.into_iter(), &EvalContext::default());
    assert_eq!(format_postfix(p).unwrap(), "4 2 /");
}
