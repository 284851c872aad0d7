pub mod ast;
pub mod evaluator;
pub mod handler;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::ParseNode;
pub use evaluator::{evaluate, evaluate_tree, evaluate_value, EvalError, Evaluator, Value, Variables};
pub use handler::{DispatchError, Handler, Role};
pub use lexer::{tokenize, LexError, Scanner};
pub use parser::{parse_expression, ParseError, Parser};
pub use token::{Token, TokenKind};
