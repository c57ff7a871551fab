use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use super::lexer::token::span::Span;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExprErrorKind {
    UnrecognizedSymbol(Span),
    MismatchedParens,
    InvalidNumber(Span),
}

impl fmt::Display for ExprErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnrecognizedSymbol(_) => write!(f, "unrecognized symbol"),
            Self::MismatchedParens => write!(f, "mismatched parentheses"),
            Self::InvalidNumber(_) => write!(f, "invalid number literal"),
        }
    }
}

/// An [`ExprErrorKind`] joined with the expression it came from, so the
/// offending word can be underlined in the report.
#[derive(Debug, Error)]
pub struct ExprError {
    pub error: ExprErrorKind,
    pub src: NamedSource<String>,
}

impl ExprError {
    pub fn new(error: ExprErrorKind, src: String, name: String) -> Self {
        ExprError {
            error,
            src: NamedSource::new(name, src),
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.error.fmt(f)
    }
}

impl Diagnostic for ExprError {
    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        use ExprErrorKind::*;
        let label = match self.error {
            UnrecognizedSymbol(span) => LabeledSpan::new_with_span(
                Some(String::from("not a number, an operator or a parenthesis")),
                span,
            ),
            InvalidNumber(span) => {
                LabeledSpan::new_with_span(Some(String::from("cannot be parsed as a number")), span)
            }
            MismatchedParens => return None,
        };
        Some(Box::new(vec![label].into_iter()))
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("Expression Error"))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src as &dyn SourceCode)
    }
}
