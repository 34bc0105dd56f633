use super::error::QueryError;
use super::token::Token;

fn is_structural(c: char) -> bool {
    Token::from_symbol(c).is_some()
}

/// Length in bytes of the literal run starting at the beginning of `rest`.
///
/// The run stops before the next structural character or at end of input.
fn literal_run_len(rest: &str) -> usize {
    rest.find(is_structural).unwrap_or(rest.len())
}

fn push(tokens: &mut Vec<Token>, token: Token) -> Result<(), QueryError> {
    tokens.try_reserve(1)?;
    tokens.push(token);
    Ok(())
}

/// Splits a raw query into tokens.
///
/// Spaces between tokens are dropped. A literal keeps its interior spaces
/// but loses trailing ones, so `"Bob |Charlie Chaplin)"` yields `Bob`, `|`,
/// `Charlie Chaplin`, `)`.
pub fn tokenize(query: &str) -> Result<Vec<Token>, QueryError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = query[pos..].chars().next() {
        if c == ' ' {
            pos += 1;
            continue;
        }

        if let Some(token) = Token::from_symbol(c) {
            push(&mut tokens, token)?;
            pos += 1;
            continue;
        }

        let run_len = literal_run_len(&query[pos..]);
        let text = query[pos..pos + run_len].trim_end_matches(' ');
        if !text.is_empty() {
            push(&mut tokens, Token::Literal(text.to_string()))?;
        }
        // Skip the whole run, trailing spaces included
        pos += run_len;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    #[test]
    fn test_tokenize_multi_word_literal() {
        let tokens = tokenize("Alice & (Bob |Charlie Chaplin)").unwrap();
        assert_eq!(
            tokens,
            vec![
                lit("Alice"),
                Token::And,
                Token::LeftParen,
                lit("Bob"),
                Token::Or,
                lit("Charlie Chaplin"),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_single_literal() {
        assert_eq!(tokenize("alice").unwrap(), vec![lit("alice")]);
    }

    #[test]
    fn test_tokenize_strips_leading_and_trailing_spaces() {
        assert_eq!(tokenize("   alice   ").unwrap(), vec![lit("alice")]);
    }

    #[test]
    fn test_tokenize_operators_without_spaces() {
        assert_eq!(
            tokenize("!a|b&c").unwrap(),
            vec![Token::Not, lit("a"), Token::Or, lit("b"), Token::And, lit("c")]
        );
    }

    #[test]
    fn test_tokenize_consecutive_structural_characters() {
        assert_eq!(
            tokenize("!! (  )").unwrap(),
            vec![Token::Not, Token::Not, Token::LeftParen, Token::RightParen]
        );
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("     ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_only_spaces_are_separators() {
        // Tabs are ordinary literal characters
        assert_eq!(tokenize("\ta |b").unwrap(), vec![lit("\ta"), Token::Or, lit("b")]);
    }

    #[test]
    fn test_tokenize_non_ascii_literal() {
        assert_eq!(
            tokenize("café & naïve").unwrap(),
            vec![lit("café"), Token::And, lit("naïve")]
        );
    }

    #[test]
    fn test_tokenize_no_literal_is_empty() {
        let tokens = tokenize(" a  |   | b ( ) ").unwrap();
        assert!(tokens.iter().all(|t| match t {
            Token::Literal(text) => !text.trim().is_empty(),
            _ => true,
        }));
    }
}
