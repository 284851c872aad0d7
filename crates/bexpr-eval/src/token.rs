use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Multiply,
    Greater,
    GreaterEqual,
    Lesser,
    LesserEqual,
    Equal,
    NotEqual,
    And,
    Or,
    Not,
    Number,
    Identifier,
    End,
}

impl TokenKind {
    /// Binding power used by the precedence-climbing loop. Only kinds that can
    /// continue an expression as an infix operator have a power above zero;
    /// the parentheses sit at 1 so a group's closing token stops its inner
    /// loop without being mistaken for a real operator.
    pub fn binding_power(self) -> u8 {
        match self {
            TokenKind::LeftParen | TokenKind::RightParen => 1,
            TokenKind::And | TokenKind::Or => 25,
            TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Lesser
            | TokenKind::LesserEqual
            | TokenKind::Equal
            | TokenKind::NotEqual => 30,
            TokenKind::Plus | TokenKind::Minus => 40,
            TokenKind::Multiply => 50,
            TokenKind::Not | TokenKind::Number | TokenKind::Identifier | TokenKind::End => 0,
        }
    }

    /// Reserved words are matched case-sensitively against a full identifier run.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "AND" => Some(TokenKind::And),
            "OR" => Some(TokenKind::Or),
            "NOT" => Some(TokenKind::Not),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFTPAREN",
            TokenKind::RightParen => "RIGHTPAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATEREQUAL",
            TokenKind::Lesser => "LESSER",
            TokenKind::LesserEqual => "LESSEREQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::End => "END",
        }
    }

    /// Source spelling of operator kinds; `None` for literals and END.
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Lesser => "<",
            TokenKind::LesserEqual => "<=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Number | TokenKind::Identifier | TokenKind::End => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token. `text` is only populated for NUMBER and IDENTIFIER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize) -> Self {
        Self {
            kind,
            text: String::new(),
            pos,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.text)
        }
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
