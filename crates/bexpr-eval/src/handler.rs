use crate::ast::ParseNode;
use crate::parser::{ParseError, Parser};
use crate::token::{Token, TokenKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Prefix,
    Infix,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Prefix => f.write_str("prefix"),
            Role::Infix => f.write_str("infix"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("token {kind} at {pos} cannot be parsed as {role}")]
pub struct DispatchError {
    pub kind: TokenKind,
    pub role: Role,
    pub pos: usize,
}

/// Parsing strategy attached to a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Literal or name; becomes a leaf.
    Atomic,
    /// NOT; wraps the expression that follows.
    UnaryPrefix,
    /// Binary operator continuing an already parsed left operand.
    Infix,
    /// `(`; yields the enclosed expression without a wrapper node.
    Grouping,
    /// END and `)`; usable in neither role.
    Unsupported,
}

impl Handler {
    pub fn for_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Number | TokenKind::Identifier => Handler::Atomic,
            TokenKind::Not => Handler::UnaryPrefix,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Lesser
            | TokenKind::LesserEqual
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::And
            | TokenKind::Or => Handler::Infix,
            TokenKind::LeftParen => Handler::Grouping,
            TokenKind::RightParen | TokenKind::End => Handler::Unsupported,
        }
    }

    pub fn parse_prefix(self, parser: &mut Parser<'_>, token: Token) -> Result<ParseNode, ParseError> {
        match self {
            Handler::Atomic => Ok(ParseNode::leaf(token)),
            Handler::UnaryPrefix => {
                let operand = parser.parse(token.kind.binding_power())?;
                Ok(ParseNode::unary(token, operand))
            }
            Handler::Grouping => {
                let inner = parser.parse(token.kind.binding_power())?;
                parser.match_and_advance(TokenKind::RightParen)?;
                Ok(inner)
            }
            Handler::Infix | Handler::Unsupported => Err(unsupported(&token, Role::Prefix)),
        }
    }

    pub fn parse_infix(
        self,
        parser: &mut Parser<'_>,
        token: Token,
        left: ParseNode,
    ) -> Result<ParseNode, ParseError> {
        match self {
            // Recursing at the operator's own power (not power + 1) stops the
            // right operand at the next operator of equal strength, which makes
            // chains such as `4-5-7` group to the left.
            Handler::Infix => {
                let right = parser.parse(token.kind.binding_power())?;
                Ok(ParseNode::binary(token, left, right))
            }
            Handler::Atomic | Handler::UnaryPrefix | Handler::Grouping | Handler::Unsupported => {
                Err(unsupported(&token, Role::Infix))
            }
        }
    }
}

fn unsupported(token: &Token, role: Role) -> ParseError {
    ParseError::Dispatch(DispatchError {
        kind: token.kind,
        role,
        pos: token.pos,
    })
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
