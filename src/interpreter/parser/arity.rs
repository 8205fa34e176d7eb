use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::ParseResult},
};

/// Largest number of operands a group may hold when its `)` is reached.
pub const MAX_OPERANDS: usize = 2;

/// An entry on the validator's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// A number or a variable.
    Operand,
    /// An opening parenthesis.
    Group,
}

/// Checks that no parenthesised group closes with more than two operands.
///
/// Operands and `(` are pushed onto a stack. A `)` pops operands back to the
/// most recent `(` and counts them. The `(` marker itself stays on the stack,
/// so once an inner group closes, its marker hides every operand pushed before
/// it from the enclosing group's count.
///
/// # Errors
/// Returns [`ParseError::InvalidArgumentCount`] when a `)` pops more than
/// [`MAX_OPERANDS`] operands.
///
/// # Examples
/// ```
/// use letcalc::interpreter::{lexer::tokenize, parser::arity::check_arity};
///
/// assert!(check_arity(&tokenize("add(1, mul(2, 3))").unwrap()).is_ok());
/// assert!(check_arity(&tokenize("add(-2, 3, 2, 3, 4)").unwrap()).is_err());
/// ```
pub fn check_arity(tokens: &[Token]) -> ParseResult<()> {
    let mut pending = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable(_) => pending.push(Pending::Operand),
            Token::LeftParen => pending.push(Pending::Group),
            Token::RightParen => {
                let mut operands = 0;
                while pending.last() == Some(&Pending::Operand) {
                    pending.pop();
                    operands += 1;
                }
                if operands > MAX_OPERANDS {
                    return Err(ParseError::InvalidArgumentCount);
                }
            },
            _ => {},
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn check(source: &str) -> ParseResult<()> {
        check_arity(&tokenize(source).unwrap())
    }

    #[test]
    fn two_operands_pass() {
        assert!(check("add(1, 2)").is_ok());
        assert!(check("mul(add(2, 2), div(9, 3))").is_ok());
        assert!(check("let(a, 5, add(a, a))").is_ok());
        assert!(check("let(a, let(b, 10, add(b, b)), let(b, 20, add(a, b)))").is_ok());
    }

    #[test]
    fn extra_operands_fail() {
        assert_eq!(check("add(-2, 3, 2, 3, 4)"), Err(ParseError::InvalidArgumentCount));
        assert_eq!(check("add(1, 2, 3)"), Err(ParseError::InvalidArgumentCount));
    }

    #[test]
    fn let_with_leaf_body_counts_three_operands() {
        assert_eq!(check("let(a, 5, a)"), Err(ParseError::InvalidArgumentCount));
    }

    #[test]
    fn closed_inner_group_hides_earlier_operands() {
        // The inner group's marker stays behind, so only `1, 5` are counted.
        assert!(check("add(mul(2, 3), 1, 5)").is_ok());
        // Operands before the inner group are never counted at all.
        assert!(check("add(1, 2, 3, mul(4, 5))").is_ok());
    }

    #[test]
    fn unbalanced_brackets_are_left_to_the_builder() {
        assert!(check("(add(3, 4)))").is_ok());
        assert!(check(")").is_ok());
    }
}
