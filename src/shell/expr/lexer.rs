pub mod token;

use token::{span::Span, Associativity, Precedence, Token, TokenKind};

use super::error::ExprErrorKind;

pub struct Lexer<'src> {
    src: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src }
    }

    /// Split the expression into whitespace-delimited word tokens.
    ///
    /// A word of only decimal digits and `.` is a number; anything else is
    /// classified by its first byte. A word starting with any other byte
    /// fails the whole tokenization.
    pub fn tokenize(&self) -> Result<Vec<Token>, ExprErrorKind> {
        let mut tokens = Vec::new();

        for word in self.src.split_ascii_whitespace() {
            let start = word.as_ptr() as usize - self.src.as_ptr() as usize;
            let span = Span::new(start, start + word.len());

            let (kind, precedence) = if word.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
                (TokenKind::Number, Precedence::None)
            } else {
                match word.as_bytes()[0] {
                    b'+' | b'-' => (TokenKind::Operator, Precedence::Additive),
                    b'*' | b'/' => (TokenKind::Operator, Precedence::Multiplicative),
                    b'(' => (TokenKind::LeftParen, Precedence::Paren),
                    b')' => (TokenKind::RightParen, Precedence::Paren),
                    _ => return Err(ExprErrorKind::UnrecognizedSymbol(span)),
                }
            };

            tokens.push(Token {
                kind,
                precedence,
                associativity: Associativity::Left,
                span,
                text: word.to_string(),
            });
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expression: &str) -> Vec<TokenKind> {
        Lexer::new(expression)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn words_are_classified() {
        use TokenKind::*;
        assert_eq!(
            kinds("3 + 4 * 2"),
            [Number, Operator, Number, Operator, Number]
        );
        assert_eq!(kinds("( 1 + 2 ) * 3").first(), Some(&LeftParen));
    }

    #[test]
    fn numbers_carry_no_precedence() {
        let tokens = Lexer::new("3 + 4").tokenize().unwrap();
        assert_eq!(tokens[0].precedence, Precedence::None);
        assert_eq!(tokens[1].precedence, Precedence::Additive);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let tokens = Lexer::new("+ * (").tokenize().unwrap();
        assert!(tokens[0].precedence < tokens[1].precedence);
        assert!(tokens[1].precedence < tokens[2].precedence);
    }

    #[test]
    fn unrecognized_symbol_is_fatal() {
        let error = Lexer::new("1 ^ 2").tokenize().unwrap_err();
        match error {
            ExprErrorKind::UnrecognizedSymbol(span) => assert_eq!(span.start(), 2),
            other => panic!("expected UnrecognizedSymbol, got {other:?}"),
        }
    }

    #[test]
    fn spans_cover_the_source_words() {
        let src = "10 + 200";
        let tokens = Lexer::new(src).tokenize().unwrap();
        let words: Vec<&str> = tokens
            .iter()
            .map(|token| &src[token.span.start()..token.span.end()])
            .collect();
        assert_eq!(words, ["10", "+", "200"]);
    }
}
