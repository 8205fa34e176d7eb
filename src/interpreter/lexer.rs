use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::ParseResult};

/// Every keyword is exactly this many characters long.
const KEYWORD_LENGTH: usize = 3;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`
    Div,
    /// `let`
    Let,
    /// Identifier tokens such as `a` or `total_1`.
    Variable(String),
    /// Integer literal tokens such as `0`, `42` or `-7`.
    Number(i32),
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// The kind of a [`Token`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Add,
    Sub,
    Mul,
    Div,
    Let,
    Variable,
    Number,
    Comma,
    LeftParen,
    RightParen,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Add,
            Self::Sub => TokenKind::Sub,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::Let => TokenKind::Let,
            Self::Variable(_) => TokenKind::Variable,
            Self::Number(_) => TokenKind::Number,
            Self::Comma => TokenKind::Comma,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Sub => f.write_str("sub"),
            Self::Mul => f.write_str("mul"),
            Self::Div => f.write_str("div"),
            Self::Let => f.write_str("let"),
            Self::Variable(name) => f.write_str(name),
            Self::Number(value) => write!(f, "{value}"),
            Self::Comma => f.write_str(","),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Classifies a run of text once its boundaries are known.
///
/// The scanner decides where a run starts and ends; this lexer only decides
/// whether the whole run is a keyword, a numeral or a name.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    #[token("add")]
    Add,
    #[token("sub")]
    Sub,
    #[token("mul")]
    Mul,
    #[token("div")]
    Div,
    #[token("let")]
    Let,
    /// `0`, or an optionally negative numeral without leading zeros.
    #[regex(r"0|-?[1-9][0-9]*")]
    Numeral,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
}

impl Word {
    /// Returns the word only if a single match covers all of `text`.
    fn whole(text: &str) -> Option<Self> {
        let mut lexer = Self::lexer(text);
        let word = lexer.next()?.ok()?;
        (lexer.span() == (0..text.len()) && lexer.next().is_none()).then_some(word)
    }

    const fn keyword(self) -> Option<Token> {
        match self {
            Self::Add => Some(Token::Add),
            Self::Sub => Some(Token::Sub),
            Self::Mul => Some(Token::Mul),
            Self::Div => Some(Token::Div),
            Self::Let => Some(Token::Let),
            Self::Numeral | Self::Name => None,
        }
    }
}

/// Walks the input one token at a time.
///
/// Numerals and identifiers extend up to the next `,` or `)`, so whitespace
/// inside them ends up inside the run and fails validation.
struct Scanner {
    chars:    Vec<char>,
    position: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self { chars:    source.chars().collect(),
               position: 0, }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Stops the scan after an error so the iterator is fused.
    fn fail(&mut self, error: ParseError) -> ParseResult<Token> {
        self.position = self.chars.len();
        Err(error)
    }

    fn single(&mut self, token: Token) -> ParseResult<Token> {
        self.position += 1;
        Ok(token)
    }

    /// The trimmed text from the cursor up to the next `,` or `)`.
    fn run(&self) -> String {
        self.chars[self.position..].iter()
                                   .copied()
                                   .take_while(|&c| c != ',' && c != ')')
                                   .collect::<String>()
                                   .trim()
                                   .to_owned()
    }

    fn number(&mut self) -> ParseResult<Token> {
        let position = self.position;
        let literal = self.run();

        if Word::whole(&literal) != Some(Word::Numeral) {
            return self.fail(ParseError::InvalidNumber { literal, position });
        }
        let Ok(value) = literal.parse::<i32>() else {
            return self.fail(ParseError::NumberOutOfRange { literal, position });
        };

        self.position += literal.chars().count();
        Ok(Token::Number(value))
    }

    /// Matches exactly the next three characters against the keyword set.
    fn keyword(&mut self) -> Option<Token> {
        let slice: String = self.chars
                                .get(self.position..self.position + KEYWORD_LENGTH)?
                                .iter()
                                .collect();
        let token = Word::whole(&slice)?.keyword()?;

        self.position += KEYWORD_LENGTH;
        Some(token)
    }

    fn identifier(&mut self) -> ParseResult<Token> {
        let position = self.position;
        let name = self.run();

        if Word::whole(&name) != Some(Word::Name) {
            return self.fail(ParseError::InvalidIdentifier { name, position });
        }

        self.position += name.chars().count();
        Ok(Token::Variable(name))
    }
}

impl Iterator for Scanner {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }

        let token = match self.peek()? {
            ',' => self.single(Token::Comma),
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            c if c.is_ascii_digit() || c == '-' => self.number(),
            c if c.is_alphabetic() => match self.keyword() {
                Some(token) => Ok(token),
                None => self.identifier(),
            },
            character => {
                let position = self.position;
                self.fail(ParseError::UnexpectedCharacter { character, position })
            },
        };

        Some(token)
    }
}

/// Scans raw text into tokens.
///
/// Blank input yields an empty sequence. Keywords are case-sensitive and are
/// recognised by their first three characters alone.
///
/// # Errors
/// Returns a lexical [`ParseError`] for an unexpected character, a malformed
/// numeral or identifier, or a numeral outside the 32-bit signed range.
///
/// # Examples
/// ```
/// use letcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("sub(-2, x)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Sub,
///                 Token::LeftParen,
///                 Token::Number(-2),
///                 Token::Comma,
///                 Token::Variable("x".to_string()),
///                 Token::RightParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    Scanner::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Token {
        Token::Variable(name.to_string())
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize(" \t  ").unwrap(), vec![]);
    }

    #[test]
    fn tokenise_operators() {
        for (source, op) in [("add", Token::Add),
                             ("sub", Token::Sub),
                             ("mul", Token::Mul),
                             ("div", Token::Div)]
        {
            assert_eq!(tokenize(&format!("{source}(2, 4)")).unwrap(),
                       vec![op,
                            Token::LeftParen,
                            Token::Number(2),
                            Token::Comma,
                            Token::Number(4),
                            Token::RightParen]);
        }
    }

    #[test]
    fn whitespace_is_skipped_between_tokens() {
        let tokens = tokenize("  let    (   a   ,  4    , add  (   a   , a    )   )   ").unwrap();
        assert_eq!(tokens,
                   vec![Token::Let,
                        Token::LeftParen,
                        var("a"),
                        Token::Comma,
                        Token::Number(4),
                        Token::Comma,
                        Token::Add,
                        Token::LeftParen,
                        var("a"),
                        Token::Comma,
                        var("a"),
                        Token::RightParen,
                        Token::RightParen]);
        assert_eq!(tokenize("add(1,2)").unwrap(), tokenize("  add ( 1 , 2 )  ").unwrap());
    }

    #[test]
    fn nested_let() {
        let tokens = tokenize("let(a, let(b, 2, mul(b, b)), add(a, a))").unwrap();
        assert_eq!(tokens.len(), 25);
        assert_eq!(tokens[4], Token::Let);
        assert_eq!(tokens[6], var("b"));
        assert_eq!(tokens[8], Token::Number(2));
    }

    #[test]
    fn zero_and_negative_numbers() {
        assert_eq!(tokenize("add(0, 3)").unwrap()[2], Token::Number(0));
        assert_eq!(tokenize("sub(-2, 4)").unwrap()[2], Token::Number(-2));
        assert_eq!(tokenize("add(2147483647, -2147483648)").unwrap()[2],
                   Token::Number(i32::MAX));
        assert_eq!(tokenize("add(2147483647, -2147483648)").unwrap()[4],
                   Token::Number(i32::MIN));
    }

    #[test]
    fn leading_zeros_are_rejected() {
        assert!(matches!(tokenize("add(355, 04)"),
                         Err(ParseError::InvalidNumber { ref literal, .. }) if literal == "04"));
        assert!(tokenize("add(00, 1)").is_err());
        assert!(tokenize("add(-0, 1)").is_err());
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(matches!(tokenize("mul(32723423423423467, 2)"),
                         Err(ParseError::NumberOutOfRange { .. })));
        assert!(matches!(tokenize("mul(2147483648, 2)"),
                         Err(ParseError::NumberOutOfRange { .. })));
    }

    #[test]
    fn whitespace_inside_runs_is_rejected() {
        assert!(matches!(tokenize("add(35 5, 4)"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(tokenize("ad d(3, 4)"), Err(ParseError::InvalidIdentifier { .. })));
        assert!(matches!(tokenize("add(ar d, 4)"), Err(ParseError::InvalidIdentifier { .. })));
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(tokenize("add(a, &)"),
                   Err(ParseError::UnexpectedCharacter { character: '&',
                                                         position:  7, }));
        assert!(matches!(tokenize("add(a, 4&)"), Err(ParseError::InvalidNumber { .. })));
        assert!(tokenize("_a").is_err());
    }

    #[test]
    fn identifiers_must_not_start_with_a_digit() {
        assert!(matches!(tokenize("let(4a, 4, add(a, a))"),
                         Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(matches!(tokenize("lEt(a, 4, add(a, a))"),
                         Err(ParseError::InvalidIdentifier { .. })));
        assert_eq!(tokenize("add(Add, x_1)").unwrap()[2], var("Add"));
    }

    #[test]
    fn short_tail_is_an_identifier() {
        assert_eq!(tokenize("ab").unwrap(), vec![var("ab")]);
    }

    #[test]
    fn display_matches_source_spelling() {
        let rendered: Vec<String> = tokenize("let(x, -3, div(x, 2))").unwrap()
                                                                     .iter()
                                                                     .map(ToString::to_string)
                                                                     .collect();
        assert_eq!(rendered.concat(), "let(x,-3,div(x,2))");
    }
}
