use super::{
    error::ExprErrorKind,
    lexer::token::{Associativity, Token, TokenKind},
};

/// Reorder an infix token sequence into postfix (shunting-yard).
///
/// Operators are popped from the stack while the top binds at least as
/// tightly as the incoming operator (strictly tighter, or equally tight with
/// a left-associative newcomer). Parentheses group as usual; any unmatched
/// parenthesis, in either direction, is a structural error.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ExprErrorKind> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => output.push(token),
            TokenKind::Operator => {
                while let Some(top) = operators.last() {
                    if top.is_left_paren() {
                        break;
                    }
                    let outranks = top.precedence > token.precedence
                        || (top.precedence == token.precedence
                            && token.associativity == Associativity::Left);
                    if !outranks {
                        break;
                    }
                    output.push(operators.pop().unwrap());
                }
                operators.push(token);
            }
            TokenKind::LeftParen => operators.push(token),
            TokenKind::RightParen => loop {
                match operators.pop() {
                    Some(top) if top.is_left_paren() => break,
                    Some(top) => output.push(top),
                    None => return Err(ExprErrorKind::MismatchedParens),
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top.is_left_paren() {
            return Err(ExprErrorKind::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::expr::lexer::Lexer;

    fn postfix(expression: &str) -> Result<Vec<String>, ExprErrorKind> {
        let tokens = Lexer::new(expression).tokenize()?;
        Ok(to_postfix(tokens)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }

    #[test]
    fn multiplication_is_output_before_addition() {
        assert_eq!(postfix("3 + 4 * 2").unwrap(), ["3", "4", "2", "*", "+"]);
    }

    #[test]
    fn equal_precedence_pops_left_to_right() {
        assert_eq!(postfix("1 - 2 + 3").unwrap(), ["1", "2", "-", "3", "+"]);
    }

    #[test]
    fn parentheses_group_the_inner_expression() {
        assert_eq!(postfix("( 1 + 2 ) * 3").unwrap(), ["1", "2", "+", "3", "*"]);
    }

    #[test]
    fn unclosed_left_paren_is_mismatched() {
        assert!(matches!(
            postfix("( 1 + 2"),
            Err(ExprErrorKind::MismatchedParens)
        ));
    }

    #[test]
    fn unmatched_right_parens_are_mismatched() {
        assert!(matches!(postfix("1 )"), Err(ExprErrorKind::MismatchedParens)));
        assert!(matches!(
            postfix("( 1 ) ) )"),
            Err(ExprErrorKind::MismatchedParens)
        ));
    }
}
