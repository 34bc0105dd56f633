use super::error::QueryError;
use super::token::Token;

/// ASCII case-insensitive substring search.
///
/// Non-ASCII bytes must match exactly. An empty needle is found everywhere.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// A value on the evaluation stack
#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    /// Literal not yet searched for in the candidate
    Pending(&'a str),
    Resolved(bool),
}

impl Operand<'_> {
    fn resolve(self, candidate: &str) -> bool {
        match self {
            Operand::Pending(text) => contains_ignore_ascii_case(candidate, text),
            Operand::Resolved(value) => value,
        }
    }
}

fn pop<'a>(stack: &mut Vec<Operand<'a>>) -> Result<Operand<'a>, QueryError> {
    stack
        .pop()
        .ok_or(QueryError::MalformedPostfix("operator is missing an operand"))
}

/// Evaluates a postfix token sequence against `candidate`.
///
/// Both operands of `&` and `|` are always resolved; there is no
/// short-circuiting.
pub fn evaluate(postfix: &[Token], candidate: &str) -> Result<bool, QueryError> {
    if let [Token::Literal(text)] = postfix {
        return Ok(contains_ignore_ascii_case(candidate, text));
    }

    let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Literal(text) => stack.push(Operand::Pending(text)),
            Token::Not => {
                let value = pop(&mut stack)?.resolve(candidate);
                stack.push(Operand::Resolved(!value));
            }
            Token::And | Token::Or => {
                let right = pop(&mut stack)?.resolve(candidate);
                let left = pop(&mut stack)?.resolve(candidate);
                let value = if *token == Token::And {
                    left && right
                } else {
                    left || right
                };
                stack.push(Operand::Resolved(value));
            }
            Token::LeftParen | Token::RightParen => {
                return Err(QueryError::MalformedPostfix(
                    "parenthesis in postfix sequence",
                ))
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(result.resolve(candidate)),
        [] => Err(QueryError::MalformedPostfix("nothing to evaluate")),
        _ => Err(QueryError::MalformedPostfix("missing operator between terms")),
    }
}
