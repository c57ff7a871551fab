pub mod span;

use span::Span;

#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub precedence: Precedence,
    pub associativity: Associativity,
    pub span: Span,
    pub text: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
    Number,
    Operator,
    LeftParen,
    RightParen,
}

/// Binding strength class of a token.
///
/// Declaration order is comparison order: parentheses bind tighter than
/// `*` and `/`, which bind tighter than `+` and `-`. Numbers carry `None`
/// and are never compared.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Precedence {
    None,
    Additive,
    Multiplicative,
    Paren,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

impl Token {
    pub fn is_left_paren(&self) -> bool {
        self.kind == TokenKind::LeftParen
    }
}
