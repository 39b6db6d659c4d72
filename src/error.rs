use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Every way an evaluation can fail. Each failure aborts the whole
/// evaluation; there is no partial result.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid number '{literal}'")]
    #[diagnostic(help("a number may contain at most one decimal point and at least one digit"))]
    NumericFormat {
        literal: String,
        #[label("this numeric literal")]
        span: SourceSpan,
    },

    #[error("unknown function: {name}")]
    #[diagnostic(help(
        "known functions are sqrt, cbrt, log, sin, cos, tan, asin, acos, atan, abs and fact"
    ))]
    UnknownFunction {
        name: String,
        #[label("this function name")]
        span: SourceSpan,
    },

    #[error("unexpected {}", describe(.found))]
    UnexpectedCharacter {
        found: Option<char>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unexpected trailing input '{rest}'")]
    TrailingInput {
        rest: String,
        #[label("not part of the expression")]
        span: SourceSpan,
    },

    #[error("factorial of negative number {value}")]
    NegativeFactorial {
        value: i64,
        #[label("applied here")]
        span: SourceSpan,
    },

    #[error("expression nests deeper than {limit} levels")]
    #[diagnostic(help("raise the nesting limit or simplify the expression"))]
    DepthExceeded {
        limit: usize,
        #[label("limit reached here")]
        span: SourceSpan,
    },

    #[error("missing closing parenthesis")]
    UnclosedParen {
        #[label("this parenthesis is never closed")]
        span: SourceSpan,
    },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}
