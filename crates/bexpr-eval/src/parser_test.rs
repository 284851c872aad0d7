use super::{parse_expression, ParseError, Parser};
use crate::handler::{DispatchError, Role};
use crate::lexer::LexError;
use crate::token::TokenKind;

fn tree(input: &str) -> String {
    parse_expression(input).expect("parse").to_string()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tree("5 + 3 * 4 - 2"), "(- (+ 5 (* 3 4)) 2)");
}

#[test]
fn same_precedence_chains_group_left() {
    assert_eq!(tree("4-5-7"), "(- (- 4 5) 7)");
    assert_eq!(tree("4+5-7+3"), "(+ (- (+ 4 5) 7) 3)");
    assert_eq!(tree("a OR b AND c"), "(AND (OR a b) c)");
}

#[test]
fn parentheses_override_precedence_without_wrapper_node() {
    assert_eq!(tree("5 + 3 * (4 - 2)"), "(+ 5 (* 3 (- 4 2)))");
    assert_eq!(tree("((7))"), "7");
}

#[test]
fn comparisons_bind_tighter_than_logical_operators() {
    assert_eq!(
        tree("(4 > 3) AND 3 <= 2 OR 67 > 45"),
        "(OR (AND (> 4 3) (<= 3 2)) (> 67 45))"
    );
    assert_eq!(tree("14+4 > 5"), "(> (+ 14 4) 5)");
}

#[test]
fn not_takes_the_loosest_following_expression() {
    assert_eq!(tree("4 > 6 OR NOT 4 > 8"), "(OR (> 4 6) (NOT (> 4 8)))");
    assert_eq!(tree("NOT a == 1 AND b"), "(NOT (AND (== a 1) b))");
}

#[test]
fn not_node_keeps_operand_on_the_left() {
    let node = parse_expression("NOT x").expect("parse");
    assert_eq!(node.token.kind, TokenKind::Not);
    assert!(node.left().is_some());
    assert!(node.right().is_none());
}

#[test]
fn empty_input_fails_to_dispatch_end() {
    assert_eq!(
        parse_expression("   "),
        Err(ParseError::Dispatch(DispatchError {
            kind: TokenKind::End,
            role: Role::Prefix,
            pos: 3,
        }))
    );
}

#[test]
fn stray_closing_paren_fails() {
    let err = parse_expression(" 6+3) > 7").expect_err("must fail");
    assert_eq!(
        err,
        ParseError::Dispatch(DispatchError {
            kind: TokenKind::RightParen,
            role: Role::Infix,
            pos: 4,
        })
    );
}

#[test]
fn unclosed_group_reports_expected_and_found() {
    let err = parse_expression("(1 + 2").expect_err("must fail");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::RightParen,
            found: TokenKind::End,
            pos: 6,
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected token at 6: expected RIGHTPAREN, found END"
    );
}

#[test]
fn operator_in_prefix_position_fails() {
    let err = parse_expression("* 3").expect_err("must fail");
    assert!(matches!(
        err,
        ParseError::Dispatch(DispatchError {
            kind: TokenKind::Multiply,
            role: Role::Prefix,
            ..
        })
    ));
}

#[test]
fn dangling_operator_fails_on_end() {
    let err = parse_expression("1 +").expect_err("must fail");
    assert!(matches!(
        err,
        ParseError::Dispatch(DispatchError {
            kind: TokenKind::End,
            role: Role::Prefix,
            ..
        })
    ));
}

#[test]
fn lex_errors_surface_through_parser() {
    assert_eq!(
        parse_expression("8 > & 7"),
        Err(ParseError::Lex(LexError::UnexpectedCharacter { ch: '&', pos: 4 }))
    );
}

#[test]
fn trailing_tokens_are_left_for_the_caller() {
    let mut parser = Parser::new("1 2").expect("parser");
    let node = parser.parse(0).expect("parse");
    assert_eq!(node.to_string(), "1");
    assert_eq!(parser.peek().kind, TokenKind::Number);
    assert_eq!(
        parser.expect_end(),
        Err(ParseError::UnexpectedToken {
            expected: TokenKind::End,
            found: TokenKind::Number,
            pos: 2,
        })
    );
}

#[test]
fn fully_consumed_input_passes_end_check() {
    let mut parser = Parser::new("(1)").expect("parser");
    parser.parse(0).expect("parse");
    assert_eq!(parser.expect_end(), Ok(()));
}

#[test]
fn match_and_advance_moves_past_expected_token() {
    let mut parser = Parser::new(") 1").expect("parser");
    parser
        .match_and_advance(TokenKind::RightParen)
        .expect("closing paren");
    assert_eq!(parser.peek().kind, TokenKind::Number);
    assert!(parser.match_and_advance(TokenKind::RightParen).is_err());
}

#[test]
fn not_inside_a_group_swallows_the_closing_paren() {
    let err = parse_expression("(NOT 4 > 8)").expect_err("must fail");
    assert_eq!(
        err,
        ParseError::Dispatch(DispatchError {
            kind: TokenKind::RightParen,
            role: Role::Infix,
            pos: 10,
        })
    );
    assert!(matches!(
        parse_expression("(4 > 3 AND NOT 2 > 5)"),
        Err(ParseError::Dispatch(DispatchError {
            kind: TokenKind::RightParen,
            role: Role::Infix,
            ..
        }))
    ));
}

#[test]
fn not_before_a_group_is_the_bracketed_spelling() {
    assert_eq!(tree("NOT (4 > 8)"), "(NOT (> 4 8))");
    assert_eq!(tree("4 > 3 AND NOT (2 > 5)"), "(AND (> 4 3) (NOT (> 2 5)))");
}
