use std::fmt;

/// A single lexical unit of a search query.
///
/// Only `Literal` carries a payload; its text is never empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Literal(String),
    Or,
    And,
    Not,
    LeftParen,
    RightParen,
}

impl Token {
    /// Binding strength of an operator token (`Or` < `And` < `Not`).
    ///
    /// Literals and parentheses have no precedence and return `None`.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Or => Some(1),
            Token::And => Some(2),
            Token::Not => Some(3),
            _ => None,
        }
    }

    /// Maps a structural character to its token
    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            '|' => Some(Token::Or),
            '&' => Some(Token::And),
            '!' => Some(Token::Not),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Or => write!(f, "|"),
            Token::And => write!(f, "&"),
            Token::Not => write!(f, "!"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence space-separated, e.g. `A B C & |`
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
