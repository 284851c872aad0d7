use crate::ast::ParseNode;
use crate::handler::{DispatchError, Handler};
use crate::lexer::{LexError, Scanner};
use crate::token::{Token, TokenKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
    #[error("unexpected token at {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        pos: usize,
    },
}

#[derive(Debug, Clone)]
struct Lookahead {
    token: Token,
    handler: Handler,
}

impl Lookahead {
    fn scan(scanner: &mut Scanner<'_>) -> Result<Self, ParseError> {
        let token = scanner.next_token()?;
        log::trace!("scanned {token} at {}", token.pos);
        let handler = Handler::for_kind(token.kind);
        Ok(Self { token, handler })
    }
}

/// Precedence-climbing parser that pulls tokens from its own scanner and
/// always holds exactly one token of lookahead.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Lookahead,
}

/// Parses one complete expression. Tokens left after it are not inspected;
/// use [`Parser::expect_end`] when the whole input must be consumed.
pub fn parse_expression(input: &str) -> Result<ParseNode, ParseError> {
    let mut parser = Parser::new(input)?;
    let tree = parser.parse(0)?;
    log::debug!("parsed `{input}` as {tree}");
    Ok(tree)
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(input);
        let lookahead = Lookahead::scan(&mut scanner)?;
        Ok(Self { scanner, lookahead })
    }

    pub fn peek(&self) -> &Token {
        &self.lookahead.token
    }

    /// Parses the longest expression whose operators all bind tighter than
    /// `min_binding_power`.
    pub fn parse(&mut self, min_binding_power: u8) -> Result<ParseNode, ParseError> {
        let current = self.advance()?;
        let mut left = current.handler.parse_prefix(self, current.token)?;

        while self.lookahead.token.kind.binding_power() > min_binding_power {
            let current = self.advance()?;
            left = current.handler.parse_infix(self, current.token, left)?;
        }
        Ok(left)
    }

    /// Consumes the lookahead if it is `kind`, failing otherwise.
    pub fn match_and_advance(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        self.check(kind)?;
        self.advance()?;
        Ok(())
    }

    pub fn expect_end(&self) -> Result<(), ParseError> {
        self.check(TokenKind::End)
    }

    fn check(&self, expected: TokenKind) -> Result<(), ParseError> {
        let found = &self.lookahead.token;
        if found.kind == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: found.kind,
                pos: found.pos,
            })
        }
    }

    fn advance(&mut self) -> Result<Lookahead, ParseError> {
        let next = Lookahead::scan(&mut self.scanner)?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
