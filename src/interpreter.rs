/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree depth-first, left operand before right,
/// records `let` bindings in a single table that lives for one evaluation,
/// and reports unbound variables and division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces the keyword, number, variable
/// and punctuation tokens of the prefix-call grammar. It is the first stage of
/// interpretation and the only one that reports lexical errors.
///
/// # Responsibilities
/// - Skips whitespace between tokens and rejects it inside literals.
/// - Validates numerals (no leading zeros, 32-bit range) and identifiers.
/// - Recognises the five three-letter keywords case-sensitively.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Parsing happens in two steps: an arity check over the flat token sequence,
/// then tree construction with an explicit stack of parent nodes.
///
/// # Responsibilities
/// - Rejects groups with more than two operands.
/// - Rejects unbalanced brackets and trees with no typed shape.
/// - Bounds nesting depth so later recursion cannot exhaust the stack.
pub mod parser;
