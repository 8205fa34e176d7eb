use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// Addition, subtraction and multiplication wrap on overflow in two's
    /// complement. Division truncates toward zero; `i32::MIN / -1` wraps to
    /// `i32::MIN`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when `op` is `Div` and `right`
    /// is zero.
    ///
    /// # Example
    /// ```
    /// use letcalc::{ast::Operator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(Operator::Div, -7, 2).unwrap(), -3);
    /// assert_eq!(Context::eval_binary(Operator::Add, i32::MAX, 1).unwrap(), i32::MIN);
    /// assert!(Context::eval_binary(Operator::Div, 1, 0).is_err());
    /// ```
    pub const fn eval_binary(op: Operator, left: i32, right: i32) -> EvalResult<i32> {
        match op {
            Operator::Add => Ok(left.wrapping_add(right)),
            Operator::Sub => Ok(left.wrapping_sub(right)),
            Operator::Mul => Ok(left.wrapping_mul(right)),
            Operator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left.wrapping_div(right))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_i32_arithmetic() {
        let pairs = [(1, 2), (111, -30_000), (-7, 3), (0, 5), (32_767, 32_767), (-32_767, 32_767)];
        for (a, b) in pairs {
            assert_eq!(Context::eval_binary(Operator::Add, a, b), Ok(a + b));
            assert_eq!(Context::eval_binary(Operator::Sub, a, b), Ok(a - b));
            assert_eq!(Context::eval_binary(Operator::Mul, a, b), Ok(a * b));
            assert_eq!(Context::eval_binary(Operator::Div, a, b), Ok(a / b));
        }
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Context::eval_binary(Operator::Div, 5, 2), Ok(2));
        assert_eq!(Context::eval_binary(Operator::Div, -5, 2), Ok(-2));
        assert_eq!(Context::eval_binary(Operator::Div, 5, -2), Ok(-2));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(Context::eval_binary(Operator::Sub, i32::MIN, 1), Ok(i32::MAX));
        assert_eq!(Context::eval_binary(Operator::Mul, 65_536, 65_536), Ok(0));
        assert_eq!(Context::eval_binary(Operator::Div, i32::MIN, -1), Ok(i32::MIN));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Context::eval_binary(Operator::Div, 10, 0), Err(RuntimeError::DivisionByZero));
        assert_eq!(Context::eval_binary(Operator::Div, 0, 0), Err(RuntimeError::DivisionByZero));
    }
}
