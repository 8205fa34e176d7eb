use std::fmt;

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`, truncating toward zero.
    Div,
}

impl Operator {
    /// The keyword spelling of the operator.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A terminal node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// An integer literal.
    Number(i32),
    /// A reference to a `let`-bound name.
    Variable(String),
}

/// An abstract syntax tree (AST) node.
///
/// Every variant carries exactly the children its form needs, so an operator
/// always has two operands and a `let` always has a name, a value and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal or a variable reference.
    Leaf(Leaf),
    /// `op(left, right)`
    Operator {
        /// The operator to apply.
        op:    Operator,
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `let(name, value, body)`
    Let {
        /// The name being bound.
        name:  String,
        /// Expression whose result is bound to `name`.
        value: Box<Self>,
        /// Expression evaluated after the binding.
        body:  Box<Self>,
    },
}

impl Expr {
    /// Shorthand for a number leaf.
    #[must_use]
    pub const fn number(value: i32) -> Self {
        Self::Leaf(Leaf::Number(value))
    }

    /// Shorthand for a variable leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Variable(name.into()))
    }

    /// Shorthand for an operator node.
    #[must_use]
    pub fn operator(op: Operator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Shorthand for a `let` node.
    #[must_use]
    pub fn binding(name: impl Into<String>, value: Self, body: Self) -> Self {
        Self::Let { name:  name.into(),
                    value: Box::new(value),
                    body:  Box::new(body), }
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Let { value, body, .. } => 1 + value.depth().max(body.depth()),
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
        }
    }
}

/// Renders the tree back into source form, e.g. `let(a, 5, add(a, a))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(f, "{leaf}"),
            Self::Operator { op, left, right } => write!(f, "{op}({left}, {right})"),
            Self::Let { name, value, body } => write!(f, "let({name}, {value}, {body})"),
        }
    }
}
