use crate::{ast::Expr, error::ParseError, interpreter::lexer::Token};

/// Operand-count validation.
///
/// Makes one stack-based pass over the tokens and rejects any group that
/// closes with more than two operands.
pub mod arity;
/// Tree construction.
///
/// Turns a validated token sequence into an [`Expr`] by way of an untyped
/// draft tree, then seals the draft into typed nodes.
pub mod tree;

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how many groups may be open at once.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Validates operand counts and builds the syntax tree.
///
/// # Errors
/// Returns a syntax [`ParseError`] if validation or tree construction fails.
///
/// # Examples
/// ```
/// use letcalc::interpreter::{
///     lexer::tokenize,
///     parser::{DEFAULT_MAX_DEPTH, parse},
/// };
///
/// let expr = parse(tokenize("let(a, 5, add(a, a))").unwrap(), DEFAULT_MAX_DEPTH).unwrap();
/// assert_eq!(expr.to_string(), "let(a, 5, add(a, a))");
/// ```
pub fn parse(tokens: Vec<Token>, max_depth: usize) -> ParseResult<Expr> {
    arity::check_arity(&tokens)?;
    tree::build_tree(tokens, max_depth)
}
