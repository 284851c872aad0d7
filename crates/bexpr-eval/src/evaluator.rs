use crate::ast::ParseNode;
use crate::parser::{parse_expression, ParseError};
use crate::token::TokenKind;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Caller-supplied variable values. Names that are absent read as 0.
pub type Variables = BTreeMap<String, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Collapses a final result to a boolean: integers are true when positive.
    pub fn truthy(self) -> bool {
        match self {
            Value::Int(number) => number > 0,
            Value::Bool(flag) => flag,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(number) => write!(f, "{number}"),
            Value::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("type mismatch: {operator} expects {expected} operands, found {} {found}", .found.type_name())]
    TypeMismatch {
        operator: TokenKind,
        expected: &'static str,
        found: Value,
    },
    #[error("integer overflow evaluating {left} {operator} {right}")]
    Overflow {
        operator: TokenKind,
        left: i64,
        right: i64,
    },
    #[error("invalid number literal: {0}")]
    InvalidNumber(String),
    #[error("{0} node is missing an operand")]
    MissingOperand(TokenKind),
    #[error("{0} cannot appear in an expression tree")]
    UnsupportedNode(TokenKind),
}

/// Parses and evaluates `expression`, coercing the result to a boolean.
pub fn evaluate(expression: &str, variables: &Variables) -> Result<bool, EvalError> {
    Ok(evaluate_value(expression, variables)?.truthy())
}

/// Parses and evaluates `expression` without the final boolean coercion.
pub fn evaluate_value(expression: &str, variables: &Variables) -> Result<Value, EvalError> {
    let tree = parse_expression(expression)?;
    let value = evaluate_tree(&tree, variables)?;
    log::debug!("evaluated `{expression}` to {value}");
    Ok(value)
}

/// Post-order walk of a parse tree. Both sides of AND/OR are always
/// evaluated.
pub fn evaluate_tree(node: &ParseNode, variables: &Variables) -> Result<Value, EvalError> {
    let operator = node.token.kind;
    match operator {
        TokenKind::Number => node
            .token
            .text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| EvalError::InvalidNumber(node.token.text.clone())),
        TokenKind::Identifier => Ok(Value::Int(
            variables.get(&node.token.text).copied().unwrap_or(0),
        )),
        TokenKind::Plus | TokenKind::Minus | TokenKind::Multiply => {
            let (left, right) = int_operands(node, variables)?;
            let result = match operator {
                TokenKind::Plus => left.checked_add(right),
                TokenKind::Minus => left.checked_sub(right),
                _ => left.checked_mul(right),
            };
            result.map(Value::Int).ok_or(EvalError::Overflow {
                operator,
                left,
                right,
            })
        }
        TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Lesser
        | TokenKind::LesserEqual
        | TokenKind::Equal
        | TokenKind::NotEqual => {
            let (left, right) = int_operands(node, variables)?;
            let result = match operator {
                TokenKind::Greater => left > right,
                TokenKind::GreaterEqual => left >= right,
                TokenKind::Lesser => left < right,
                TokenKind::LesserEqual => left <= right,
                TokenKind::Equal => left == right,
                _ => left != right,
            };
            Ok(Value::Bool(result))
        }
        TokenKind::And | TokenKind::Or => {
            let left = as_bool(operator, evaluate_tree(operand(node.left(), operator)?, variables)?)?;
            let right = as_bool(operator, evaluate_tree(operand(node.right(), operator)?, variables)?)?;
            let result = if operator == TokenKind::And {
                left && right
            } else {
                left || right
            };
            Ok(Value::Bool(result))
        }
        TokenKind::Not => {
            let value = evaluate_tree(operand(node.left(), operator)?, variables)?;
            Ok(Value::Bool(!as_bool(operator, value)?))
        }
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::End => {
            Err(EvalError::UnsupportedNode(operator))
        }
    }
}

/// Evaluates expressions while keeping each distinct expression's parse tree,
/// so re-evaluating with different variables skips scanning and parsing.
#[derive(Debug, Default)]
pub struct Evaluator {
    cache: HashMap<String, ParseNode>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn evaluate(&mut self, expression: &str, variables: &Variables) -> Result<bool, EvalError> {
        Ok(self.evaluate_value(expression, variables)?.truthy())
    }

    pub fn evaluate_value(&mut self, expression: &str, variables: &Variables) -> Result<Value, EvalError> {
        let tree = match self.cache.entry(expression.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(parse_expression(expression)?),
        };
        evaluate_tree(tree, variables)
    }

    pub fn cached_expressions(&self) -> usize {
        self.cache.len()
    }
}

fn operand(child: Option<&ParseNode>, operator: TokenKind) -> Result<&ParseNode, EvalError> {
    child.ok_or(EvalError::MissingOperand(operator))
}

fn int_operands(node: &ParseNode, variables: &Variables) -> Result<(i64, i64), EvalError> {
    let operator = node.token.kind;
    let left = evaluate_tree(operand(node.left(), operator)?, variables)?;
    let right = evaluate_tree(operand(node.right(), operator)?, variables)?;
    Ok((as_int(operator, left)?, as_int(operator, right)?))
}

fn as_int(operator: TokenKind, value: Value) -> Result<i64, EvalError> {
    match value {
        Value::Int(number) => Ok(number),
        Value::Bool(_) => Err(EvalError::TypeMismatch {
            operator,
            expected: "int",
            found: value,
        }),
    }
}

fn as_bool(operator: TokenKind, value: Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(flag) => Ok(flag),
        Value::Int(_) => Err(EvalError::TypeMismatch {
            operator,
            expected: "bool",
            found: value,
        }),
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod tests;
