//! Boolean search queries
//!
//! A query combines literal phrases with `&` (and), `|` (or), `!` (not) and
//! parentheses. It is compiled once and then evaluated against any number of
//! candidate strings using ASCII case-insensitive substring matching.
//!
//! ## Module Structure
//!
//! - **token.rs**: Token enum and operator precedence
//! - **tokenizer.rs**: Raw query string → infix tokens
//! - **postfix.rs**: Infix → postfix conversion (shunting-yard)
//! - **eval.rs**: Stack evaluation of postfix tokens against a candidate
//! - **error.rs**: QueryError
//!
//! ## Usage
//!
//! ```rust
//! use monco::query::parse_query;
//!
//! let query = parse_query("Alice | Bob & Charlie").unwrap();
//! assert!(query.matches("bob and charlie"));
//! assert!(!query.matches("Bob"));
//! ```

use std::fmt;

pub mod error;
pub mod eval;
pub mod postfix;
pub mod token;
pub mod tokenizer;

pub use error::{ParenSite, QueryError};
pub use eval::evaluate;
pub use postfix::to_postfix;
pub use token::Token;
pub use tokenizer::tokenize;

/// A parsed query in postfix form, ready to be evaluated many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    postfix: Vec<Token>,
}

impl CompiledQuery {
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Whether `candidate` satisfies the query
    pub fn matches(&self, candidate: &str) -> bool {
        evaluate(&self.postfix, candidate).unwrap_or_else(|err| {
            tracing::error!(query = %self, "Evaluation failed: {}", err);
            false
        })
    }

    /// Yields `(index, candidate)` for every matching candidate
    pub fn filter<'a, I>(&'a self, candidates: I) -> impl Iterator<Item = (usize, &'a str)> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        candidates
            .into_iter()
            .enumerate()
            .filter(move |(_, candidate)| self.matches(candidate))
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", token::join_tokens(&self.postfix))
    }
}

/// Rejects postfix sequences that would not reduce to a single value.
fn check_arity(postfix: &[Token]) -> Result<(), QueryError> {
    let mut depth: usize = 0;
    for token in postfix {
        depth = match token {
            Token::Literal(_) => depth + 1,
            Token::Not if depth >= 1 => depth,
            Token::And | Token::Or if depth >= 2 => depth - 1,
            Token::Not | Token::And | Token::Or => {
                return Err(QueryError::MalformedPostfix("operator is missing an operand"))
            }
            Token::LeftParen | Token::RightParen => {
                return Err(QueryError::MalformedPostfix(
                    "parenthesis in postfix sequence",
                ))
            }
        };
    }
    if depth > 1 {
        return Err(QueryError::MalformedPostfix("missing operator between terms"));
    }
    Ok(())
}

/// Tokenizes, converts and validates a raw query.
///
/// A query without any literal (empty, whitespace only, `()`) is rejected
/// with [`QueryError::EmptyQuery`].
pub fn parse_query(raw: &str) -> Result<CompiledQuery, QueryError> {
    let tokens = tokenize(raw)?;
    let postfix = to_postfix(tokens)?;
    if postfix.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    check_arity(&postfix)?;

    let query = CompiledQuery { postfix };
    tracing::debug!(raw, postfix = %query, "Compiled query");
    Ok(query)
}

/// Free-function form of [`CompiledQuery::matches`]
pub fn matches(query: &CompiledQuery, candidate: &str) -> bool {
    query.matches(candidate)
}
