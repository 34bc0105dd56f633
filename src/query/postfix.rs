use super::error::{ParenSite, QueryError};
use super::token::Token;

/// Whether the operator on top of the stack must be emitted before `incoming`
/// is pushed. `Not` is right-associative, `And`/`Or` left-associative.
fn yields_to(stack_top: &Token, incoming: &Token) -> bool {
    match (stack_top.precedence(), incoming.precedence()) {
        (Some(top), Some(op)) => top > op || (top == op && *incoming != Token::Not),
        _ => false,
    }
}

/// Converts an infix token sequence to postfix order (shunting-yard).
///
/// The input is consumed; literal text moves into the output without copying.
/// An excess `)` fails as soon as it is seen, an excess `(` only once the
/// input is exhausted.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, QueryError> {
    // Postfix output never outgrows its input
    let mut output: Vec<Token> = Vec::new();
    output.try_reserve_exact(tokens.len())?;
    let mut op_stack: Vec<Token> = Vec::new();
    op_stack.try_reserve_exact(tokens.len())?;

    for token in tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::Or | Token::And | Token::Not => {
                while let Some(top) = op_stack.last() {
                    if *top == Token::LeftParen || !yields_to(top, &token) {
                        break;
                    }
                    if let Some(op) = op_stack.pop() {
                        output.push(op);
                    }
                }
                op_stack.push(token);
            }
            Token::LeftParen => op_stack.push(token),
            Token::RightParen => loop {
                match op_stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(QueryError::MismatchedParentheses(
                            ParenSite::UnexpectedClose,
                        ))
                    }
                }
            },
        }
    }

    while let Some(op) = op_stack.pop() {
        if op == Token::LeftParen {
            return Err(QueryError::MismatchedParentheses(ParenSite::Unclosed));
        }
        output.push(op);
    }

    Ok(output)
}
