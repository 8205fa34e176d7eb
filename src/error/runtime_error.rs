use thiserror::Error;

/// Represents all errors that can occur while evaluating a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A variable was read before any `let` bound it.
    #[error("Unknown variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
