/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing, arity validation
/// and tree construction. Parse errors are raised before evaluation starts and
/// always mean the input was malformed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while walking a syntax tree: unbound
/// variables and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The four failure categories a caller may want to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognised character, malformed or out-of-range literal.
    Lexical,
    /// Too many operands, unbalanced brackets or an unusable tree.
    Syntax,
    /// A variable was read before it was bound.
    Binding,
    /// Division by zero.
    Arithmetic,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Examples
    /// ```
    /// use letcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("div(10, 0)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    ///
    /// let err = evaluate("add(1, 2, 3)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UnboundVariable { .. }) => ErrorKind::Binding,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::Arithmetic,
        }
    }
}
