use thiserror::Error;

/// Represents all errors that can occur while turning source text into a
/// syntax tree.
///
/// The first four variants are raised by the tokenizer and are *lexical*
/// errors; the remaining ones are raised by the arity validator or the tree
/// builder and are *syntax* errors. See [`ParseError::is_lexical`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Character offset into the input.
        position:  usize,
    },
    /// A numeral run that is not `0` or `-?[1-9][0-9]*`.
    #[error("Invalid number '{literal}' at position {position}.")]
    InvalidNumber {
        /// The trimmed numeral run.
        literal:  String,
        /// Character offset into the input.
        position: usize,
    },
    /// A well-formed numeral that does not fit in a 32-bit signed integer.
    #[error("Number '{literal}' at position {position} does not fit in 32 bits.")]
    NumberOutOfRange {
        /// The numeral as written.
        literal:  String,
        /// Character offset into the input.
        position: usize,
    },
    /// A letter-initiated run that is neither a keyword nor a valid
    /// identifier.
    #[error("Invalid identifier '{name}' at position {position}.")]
    InvalidIdentifier {
        /// The trimmed run.
        name:     String,
        /// Character offset into the input.
        position: usize,
    },
    /// A parenthesised group holds more than two operands.
    #[error("Invalid number of arguments for an expression.")]
    InvalidArgumentCount,
    /// A `)` or `,` appeared with no enclosing group.
    #[error("Unbalanced parentheses or commas in the input.")]
    UnbalancedExpression,
    /// The token sequence built a tree that has no typed shape.
    #[error("Malformed expression: {details}.")]
    MalformedExpression {
        /// What was wrong with the tree.
        details: String,
    },
    /// Parentheses nested deeper than the configured limit.
    #[error("Expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
    /// The input contained no tokens.
    #[error("No expression to parse.")]
    EmptyExpression,
}

impl ParseError {
    /// Returns `true` for errors raised by the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self,
                 Self::UnexpectedCharacter { .. }
                 | Self::InvalidNumber { .. }
                 | Self::NumberOutOfRange { .. }
                 | Self::InvalidIdentifier { .. })
    }

    pub(crate) fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedExpression { details: details.into() }
    }
}
