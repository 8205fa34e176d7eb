use std::mem;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::ParseResult,
    },
};

type NodeId = usize;

const ROOT: NodeId = 0;

/// A node under construction.
///
/// Drafts are untyped: any node may have a kind, up to three children and
/// both payloads. The `middle` slot is only ever filled for `let`.
#[derive(Debug, Default)]
struct Draft {
    kind:   Option<TokenKind>,
    number: Option<i32>,
    name:   Option<String>,
    left:   Option<NodeId>,
    middle: Option<NodeId>,
    right:  Option<NodeId>,
}

/// Arena of drafts; index `ROOT` is the root.
#[derive(Debug)]
struct DraftTree {
    nodes: Vec<Draft>,
}

impl DraftTree {
    fn seeded(kind: TokenKind) -> Self {
        Self { nodes: vec![Draft { kind: Some(kind),
                                   ..Draft::default() }], }
    }

    /// Creates an empty node and attaches it to the first free slot of
    /// `parent`: `left`, then `middle` for a `let`, then `right`. A parent with
    /// no free slot silently drops the new node, but its id is still returned
    /// so the builder can keep filling it.
    fn attach(&mut self, parent: NodeId) -> NodeId {
        let child = self.nodes.len();
        self.nodes.push(Draft::default());

        let node = &mut self.nodes[parent];
        if node.left.is_none() {
            node.left = Some(child);
        } else if node.kind == Some(TokenKind::Let) && node.middle.is_none() {
            node.middle = Some(child);
        } else if node.right.is_none() {
            node.right = Some(child);
        }

        child
    }

    fn set_kind(&mut self, id: NodeId, kind: TokenKind) {
        self.nodes[id].kind = Some(kind);
    }

    /// Converts the draft rooted at `id` into a typed expression.
    ///
    /// The node's shape decides what it becomes: `left` and `middle` make a
    /// `let`, `left` and `right` make an operator, anything else is read as a
    /// leaf from its payloads.
    fn seal(&mut self, id: NodeId) -> ParseResult<Expr> {
        let node = mem::take(&mut self.nodes[id]);

        match (node.left, node.middle, node.right) {
            (Some(left), Some(middle), right) => {
                let name = self.nodes[left].name
                                           .take()
                                           .ok_or_else(|| ParseError::malformed("let requires a name"))?;
                let right = right.ok_or_else(|| ParseError::malformed("let requires a body"))?;
                let value = self.seal(middle)?;
                let body = self.seal(right)?;

                Ok(Expr::binding(name, value, body))
            },
            (Some(left), None, Some(right)) => {
                let op = node.kind
                             .and_then(operator)
                             .ok_or_else(|| ParseError::malformed("operands given to a non-operator"))?;
                let left = self.seal(left)?;
                let right = self.seal(right)?;

                Ok(Expr::operator(op, left, right))
            },
            _ => match (node.number, node.name) {
                (Some(value), _) => Ok(Expr::number(value)),
                (None, Some(name)) => Ok(Expr::variable(name)),
                (None, None) => Err(ParseError::malformed("operand has no value")),
            },
        }
    }
}

const fn operator(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Add => Some(Operator::Add),
        TokenKind::Sub => Some(Operator::Sub),
        TokenKind::Mul => Some(Operator::Mul),
        TokenKind::Div => Some(Operator::Div),
        _ => None,
    }
}

/// Builds a syntax tree from a token sequence.
///
/// The first token's kind seeds the root (without its payload). A stack of
/// parent nodes drives the descent:
/// - `(` pushes the cursor and moves into a new child of it,
/// - `,` moves into a new child of the enclosing parent,
/// - `)` returns to the enclosing parent,
/// - operators and `let` set the cursor's kind,
/// - numbers and variables set the cursor's kind and payload.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] for an empty token sequence.
/// - [`ParseError::UnbalancedExpression`] when `)` or `,` has no enclosing
///   parent.
/// - [`ParseError::NestingTooDeep`] when more than `max_depth` groups are
///   open at once.
/// - [`ParseError::MalformedExpression`] when the finished tree has a node
///   with no typed shape.
///
/// # Examples
/// ```
/// use letcalc::{
///     ast::{Expr, Operator},
///     interpreter::{lexer::tokenize, parser::tree::build_tree},
/// };
///
/// let tokens = tokenize("add(2, 3)").unwrap();
/// let expr = build_tree(tokens, 16).unwrap();
/// assert_eq!(expr, Expr::operator(Operator::Add, Expr::number(2), Expr::number(3)));
/// ```
pub fn build_tree(tokens: Vec<Token>, max_depth: usize) -> ParseResult<Expr> {
    let mut tokens = tokens.into_iter();
    let first = tokens.next().ok_or(ParseError::EmptyExpression)?;

    let mut tree = DraftTree::seeded(first.kind());
    let mut parents: Vec<NodeId> = Vec::new();
    let mut cursor = ROOT;

    for token in tokens {
        match token {
            Token::LeftParen => {
                if parents.len() >= max_depth {
                    return Err(ParseError::NestingTooDeep { limit: max_depth });
                }
                parents.push(cursor);
                cursor = tree.attach(cursor);
            },
            Token::Comma => {
                let parent = *parents.last().ok_or(ParseError::UnbalancedExpression)?;
                cursor = tree.attach(parent);
            },
            Token::RightParen => {
                cursor = parents.pop().ok_or(ParseError::UnbalancedExpression)?;
            },
            Token::Number(value) => {
                tree.set_kind(cursor, TokenKind::Number);
                tree.nodes[cursor].number = Some(value);
            },
            Token::Variable(name) => {
                tree.set_kind(cursor, TokenKind::Variable);
                tree.nodes[cursor].name = Some(name);
            },
            Token::Add | Token::Sub | Token::Mul | Token::Div | Token::Let => {
                tree.set_kind(cursor, token.kind());
            },
        }
    }

    tree.seal(ROOT)
}
