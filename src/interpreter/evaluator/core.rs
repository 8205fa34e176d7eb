use std::collections::HashMap;

use crate::{
    ast::{Expr, Leaf},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// ## Binding table
///
/// The context holds one flat map from name to value. A `let` writes its name
/// once the value has been computed, and the entry is never removed when the
/// body finishes. Any later read of that name in the same evaluation sees the
/// most recent write, wherever it sits in the tree:
///
/// ```
/// use letcalc::evaluate;
///
/// // `x` is still bound when the right operand of `add` is evaluated.
/// assert_eq!(evaluate("add(let(x, 1, add(x, 0)), x)").unwrap(), 2);
/// ```
///
/// A fresh context is created for every top-level evaluation.
#[derive(Debug, Default)]
pub struct Context {
    bindings: HashMap<String, i32>,
}

impl Context {
    /// Creates a context with an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent value bound to `name`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<i32> {
        self.bindings.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn bind(&mut self, name: &str, value: i32) {
        self.bindings.insert(name.to_owned(), value);
    }

    /// Evaluates an expression and returns its value.
    ///
    /// - A `let` evaluates its value, binds the name, then evaluates its body.
    /// - An operator evaluates its left operand, then its right, then combines
    ///   them with [`Context::eval_binary`].
    /// - A number is its own value; a variable is looked up in the table.
    ///
    /// # Errors
    /// - [`RuntimeError::UnboundVariable`] when a variable has no binding.
    /// - [`RuntimeError::DivisionByZero`] when `div` has a zero divisor.
    ///
    /// # Examples
    /// ```
    /// use letcalc::{
    ///     ast::{Expr, Operator},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::binding("a",
    ///                          Expr::number(5),
    ///                          Expr::operator(Operator::Mul, Expr::variable("a"), Expr::number(3)));
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&expr).unwrap(), 15);
    /// assert_eq!(context.get_variable("a"), Some(5));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i32> {
        match expr {
            Expr::Leaf(Leaf::Number(value)) => Ok(*value),
            Expr::Leaf(Leaf::Variable(name)) => {
                self.get_variable(name)
                    .ok_or_else(|| RuntimeError::UnboundVariable { name: name.clone() })
            },
            Expr::Operator { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::Let { name, value, body } => {
                let value = self.eval(value)?;
                self.bind(name, value);
                self.eval(body)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    fn add(left: Expr, right: Expr) -> Expr {
        Expr::operator(Operator::Add, left, right)
    }

    #[test]
    fn unbound_variable() {
        let mut context = Context::new();
        assert_eq!(context.eval(&Expr::variable("a")),
                   Err(RuntimeError::UnboundVariable { name: "a".to_string() }));
    }

    #[test]
    fn later_let_overwrites_binding() {
        let expr = add(Expr::binding("b", Expr::number(10), add(Expr::variable("b"), Expr::number(0))),
                       Expr::binding("b", Expr::number(20), Expr::variable("b")));
        let mut context = Context::new();
        assert_eq!(context.eval(&expr).unwrap(), 30);
        assert_eq!(context.get_variable("b"), Some(20));
    }

    #[test]
    fn left_operand_is_evaluated_first() {
        let expr = add(Expr::binding("x", Expr::number(7), Expr::variable("x")),
                       Expr::variable("x"));
        assert_eq!(Context::new().eval(&expr).unwrap(), 14);

        let reversed = add(Expr::variable("x"),
                           Expr::binding("x", Expr::number(7), Expr::variable("x")));
        assert!(Context::new().eval(&reversed).is_err());
    }

    #[test]
    fn value_is_bound_before_body_runs() {
        let expr = Expr::binding("n",
                                 Expr::operator(Operator::Mul, Expr::number(6), Expr::number(7)),
                                 Expr::variable("n"));
        assert_eq!(Context::new().eval(&expr).unwrap(), 42);
    }

    #[test]
    fn error_stops_evaluation() {
        let expr = add(Expr::operator(Operator::Div, Expr::number(1), Expr::number(0)),
                       Expr::variable("missing"));
        assert_eq!(Context::new().eval(&expr), Err(RuntimeError::DivisionByZero));
    }
}
