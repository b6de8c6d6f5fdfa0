use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    LexError(String),
    SyntaxError(String),
    EvalError(String),
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexError(msg) => write!(f, "Lex error: {msg}"),
            Self::SyntaxError(msg) => write!(f, "Syntax error: {msg}"),
            Self::EvalError(msg) => write!(f, "Eval error: {msg}"),
            Self::DivisionByZero => write!(f, "Cannot divide by 0"),
        }
    }
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
