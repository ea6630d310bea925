use core::fmt;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub enum CodecError {
    LengthMismatch { expected: usize, actual: usize },
    UnknownKind(String),
    UnknownOrder(String),
    InvalidValue(String),
    LoggerInit(String),
}

impl Debug for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CodecError::")?;
        Display::fmt(self, f)
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch (expected {} bytes, got {}).",
                expected, actual
            ),
            CodecError::UnknownKind(kind) => write!(f, "Unknown integer kind '{}'.", kind),
            CodecError::UnknownOrder(order) => write!(f, "Unknown byte order '{}'.", order),
            CodecError::InvalidValue(value) => write!(f, "Invalid value '{}'.", value),
            CodecError::LoggerInit(reason) => write!(f, "Failed to initialize logging ({}).", reason),
        }
    }
}

impl Error for CodecError {}

impl PartialEq for CodecError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                CodecError::LengthMismatch { expected: e1, actual: a1 },
                CodecError::LengthMismatch { expected: e2, actual: a2 },
            ) => e1 == e2 && a1 == a2,
            (CodecError::UnknownKind(a), CodecError::UnknownKind(b)) => a == b,
            (CodecError::UnknownOrder(a), CodecError::UnknownOrder(b)) => a == b,
            (CodecError::InvalidValue(a), CodecError::InvalidValue(b)) => a == b,
            (CodecError::LoggerInit(a), CodecError::LoggerInit(b)) => a == b,
            _ => false,
        }
    }
}
