use super::{
    error::ExprErrorKind,
    lexer::token::{Token, TokenKind},
};

/// Reduce a postfix token sequence to a single value.
///
/// Operators pop the most recently pushed value as `lhs` and the one below
/// it as `rhs`, then push `rhs <op> lhs`. With the operand pushed first and
/// the operator's right-hand side on top, this computes `3 - 1` as `2`.
/// Parenthesis tokens are ignored.
///
/// # Panics
///
/// Panics if the sequence is not well-formed postfix (an operator without
/// two operands, or no final value). Well-formedness is the parser's
/// contract; no defensive validation happens here.
pub fn evaluate(postfix: &[Token]) -> Result<f32, ExprErrorKind> {
    let mut stack: Vec<f32> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Number => {
                let number = token
                    .text
                    .parse()
                    .map_err(|_| ExprErrorKind::InvalidNumber(token.span))?;
                stack.push(number);
            }
            TokenKind::Operator => {
                let lhs = stack.pop().expect("operator is missing its operands");
                let rhs = stack.pop().expect("operator is missing its operands");
                let result = match token.text.as_bytes()[0] {
                    b'+' => rhs + lhs,
                    b'-' => rhs - lhs,
                    b'*' => rhs * lhs,
                    b'/' => rhs / lhs,
                    _ => unreachable!("lexer only emits + - * / operators"),
                };
                stack.push(result);
            }
            TokenKind::LeftParen | TokenKind::RightParen => (),
        }
    }

    Ok(*stack.last().expect("postfix sequence produced no value"))
}
