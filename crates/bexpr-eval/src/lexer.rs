use crate::token::{Token, TokenKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid character '{ch}' at {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },
}

/// Pull-based scanner over the input's code points.
///
/// `read` advances one code point and remembers its width so that `backup`
/// can un-read it; that single step of pushback is all the lookahead the
/// two-character operators and the maximal-munch runs need.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    width: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            width: 0,
        }
    }

    /// Byte offset of the next unread code point.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Produces the next token. Once the input is exhausted every call
    /// yields END.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(ch) = self.read() else {
            return Ok(Token::new(TokenKind::End, start));
        };

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '>' if self.next_matches('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::Greater,
            '<' if self.next_matches('=') => TokenKind::LesserEqual,
            '<' => TokenKind::Lesser,
            '=' if self.next_matches('=') => TokenKind::Equal,
            '!' if self.next_matches('=') => TokenKind::NotEqual,
            _ if ch.is_ascii_digit() => return Ok(self.consume_number(start)),
            _ if is_identifier_char(ch) => return Ok(self.consume_identifier(start)),
            _ => return Err(LexError::UnexpectedCharacter { ch, pos: start }),
        };
        Ok(Token::new(kind, start))
    }

    fn consume_number(&mut self, start: usize) -> Token {
        self.consume_while(|ch| ch.is_ascii_digit());
        Token::with_text(TokenKind::Number, &self.input[start..self.pos], start)
    }

    fn consume_identifier(&mut self, start: usize) -> Token {
        self.consume_while(is_identifier_char);
        let word = &self.input[start..self.pos];
        match TokenKind::keyword(word) {
            Some(kind) => Token::new(kind, start),
            None => Token::with_text(TokenKind::Identifier, word, start),
        }
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(is_space);
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(ch) = self.read() {
            if !accept(ch) {
                self.backup();
                break;
            }
        }
    }

    fn next_matches(&mut self, expected: char) -> bool {
        match self.read() {
            Some(ch) if ch == expected => true,
            Some(_) => {
                self.backup();
                false
            }
            None => false,
        }
    }

    fn read(&mut self) -> Option<char> {
        let Some(ch) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = ch.len_utf8();
        self.pos += self.width;
        Some(ch)
    }

    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }
}

/// Scans the whole input, including the trailing END token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::End;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
