use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// The token set is the whole alphabet of the calculator: numbers, the four
/// arithmetic operators and parentheses. Whitespace is skipped; any other
/// character is a lexical error, so names, quotes, brackets, commas and
/// comparison operators never make it past this stage.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Floating-point literals, such as `3.14`, `.5`, `2.`, `1e10` or
    /// `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Errors produced by the logos state machine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matches.
    #[default]
    InvalidToken,
    /// A numeric literal that does not fit its representation.
    LiteralTooLarge,
}

/// Parses a floating-point literal from the current token slice.
///
/// Literals that overflow to infinity are rejected rather than silently
/// becoming `inf`.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let value: f64 = lex.slice().parse().map_err(|_| LexError::InvalidToken)?;
    if value.is_finite() { Ok(value) } else { Err(LexError::LiteralTooLarge) }
}

/// Parses an integer literal from the current token slice.
///
/// The slice is all ASCII digits, so the only possible failure is overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// - [`ParseError::InvalidToken`] for any character outside the grammar.
/// - [`ParseError::LiteralTooLarge`] for integers outside `i64` and floats
///   that overflow.
///
/// # Example
/// ```
/// use sandcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (3.5)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::Star, 2),
///                 (Token::LParen, 4),
///                 (Token::Float(3.5), 5),
///                 (Token::RParen, 8)]);
///
/// assert!(tokenize("1 + a").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::InvalidToken) => {
                return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                      position });
            },
            Err(LexError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    Ok(tokens)
}
