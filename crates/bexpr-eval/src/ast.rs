use crate::token::Token;
use std::fmt;

/// One node of the parse tree. Leaves (NUMBER, IDENTIFIER) have no children,
/// NOT keeps its operand on the left, binary operators use both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub token: Token,
    pub left: Option<Box<ParseNode>>,
    pub right: Option<Box<ParseNode>>,
}

impl ParseNode {
    pub fn leaf(token: Token) -> Self {
        Self {
            token,
            left: None,
            right: None,
        }
    }

    pub fn unary(token: Token, operand: ParseNode) -> Self {
        Self {
            token,
            left: Some(Box::new(operand)),
            right: None,
        }
    }

    pub fn binary(token: Token, left: ParseNode, right: ParseNode) -> Self {
        Self {
            token,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn left(&self) -> Option<&ParseNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&ParseNode> {
        self.right.as_deref()
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.token.kind.symbol().unwrap_or(self.token.text.as_str());
        match (self.left(), self.right()) {
            (None, None) => f.write_str(label),
            (Some(operand), None) | (None, Some(operand)) => write!(f, "({label} {operand})"),
            (Some(left), Some(right)) => write!(f, "({label} {left} {right})"),
        }
    }
}
