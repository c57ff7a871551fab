//! Arithmetic expression engine: a whitespace-word lexer, a shunting-yard
//! infix to postfix transform, and a stack-based postfix evaluator.
//!
//! Tokens are whitespace-delimited words. Multi-character operators and
//! parentheses glued to their operands (`(1*2)`) are not supported.

pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use error::{ExprError, ExprErrorKind};

use lexer::Lexer;

/// Tokenize, parse and evaluate `expression`.
pub fn eval_expression(expression: &str) -> Result<f32, ExprErrorKind> {
    let tokens = Lexer::new(expression).tokenize()?;
    let postfix = parser::to_postfix(tokens)?;
    eval::evaluate(&postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_and_parentheses() {
        assert_eq!(eval_expression("3 + 4 * 2").unwrap(), 11.0);
        assert_eq!(eval_expression("( 1 + 2 ) * 3").unwrap(), 9.0);
    }

    #[test]
    fn subtraction_keeps_operand_order() {
        // the evaluator pops the most recent value as the operand and the
        // one below it as the accumulator base
        assert_eq!(eval_expression("3 - 1").unwrap(), 2.0);
        assert_eq!(eval_expression("8 / 2").unwrap(), 4.0);
    }

    #[test]
    fn unbalanced_expression_fails_structurally() {
        assert!(matches!(
            eval_expression("( 1 + 2"),
            Err(ExprErrorKind::MismatchedParens)
        ));
    }
}
