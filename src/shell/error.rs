use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

use super::expr::ExprError;

#[derive(Debug, Error)]
pub enum ShellErrorKind {
    // exit is not a real error and is only used to interrupt the queue drain
    Exit,

    // real errors
    TooFewArguments {
        name: &'static str,
        expected: usize,
        received: usize,
    },
    Expr(#[from] ExprError),
    ParseInt(#[from] ParseIntError),
    ParseFloat(#[from] ParseFloatError),
}

impl ShellErrorKind {
    pub fn is_exit(&self) -> bool {
        matches!(self, ShellErrorKind::Exit)
    }
}

impl fmt::Display for ShellErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ShellErrorKind::*;
        match self {
            TooFewArguments {
                name,
                expected,
                received,
            } => {
                write!(f, "{name} expected {expected} arguments, received {received}")
            }
            Expr(error) => error.fmt(f),
            ParseInt(error) => error.fmt(f),
            ParseFloat(error) => error.fmt(f),
            // exit should always be handled and should therefore never be displayed
            Exit => unreachable!("exit should never be printed as an error"),
        }
    }
}

impl Diagnostic for ShellErrorKind {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        use ShellErrorKind::*;
        Some(match self {
            Expr(error) => return error.code(),
            TooFewArguments { .. } => Box::new("Argument Error"),
            ParseInt(..) | ParseFloat(..) => Box::new("Number Error"),
            Exit => return None,
        })
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            ShellErrorKind::Expr(error) => error.labels(),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            ShellErrorKind::Expr(error) => error.source_code(),
            _ => None,
        }
    }
}
