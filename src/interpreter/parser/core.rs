use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::{Token, tokenize},
    limits::Limits,
};

/// Result type used by the lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height.
///
/// The height is tracked while the tree is built so that long operator
/// chains are bounded by the same limit as deep nesting.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Recursive descent parser over a lexed token stream.
///
/// The grammar, from lowest to highest precedence:
/// ```text
///     expr    := term (('+' | '-') term)*
///     term    := factor (('*' | '/') factor)*
///     factor  := ('+' | '-') factor | atom
///     atom    := NUMBER | '(' expr ')'
/// ```
/// Every production builds one of the three [`Expr`] variants, so the parser
/// cannot produce anything the evaluator does not understand.
pub struct Parser<I>
    where I: Iterator
{
    pub(super) tokens: Peekable<I>,
    end:               usize,
    max_depth:         usize,
    depth:             usize,
}

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Creates a parser over `(token, byte offset)` pairs.
    ///
    /// `end` is the length of the source and is reported as the position of
    /// errors at the end of input. The depth limit is clamped with
    /// [`Limits::effective_max_depth`].
    pub fn new(tokens: I, end: usize, limits: Limits) -> Self {
        Self { tokens: tokens.peekable(),
               end,
               max_depth: limits.effective_max_depth(),
               depth: 0 }
    }

    /// Parses the whole token stream as a single expression.
    ///
    /// # Errors
    /// - [`ParseError::EmptyExpression`] if there are no tokens.
    /// - [`ParseError::UnmatchedClosingParen`] for a stray `)`.
    /// - [`ParseError::UnexpectedTrailingTokens`] if anything else follows a
    ///   complete expression.
    /// - Any error from the individual productions.
    pub fn parse_expression(mut self) -> ParseResult<Expr> {
        if self.tokens.peek().is_none() {
            return Err(ParseError::EmptyExpression);
        }

        let parsed = self.parse_additive()?;

        match self.tokens.next() {
            None => Ok(parsed.expr),
            Some(&(Token::RParen, position)) => {
                Err(ParseError::UnmatchedClosingParen { position })
            },
            Some(&(token, position)) => {
                Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                           position })
            },
        }
    }

    /// Records one level of recursive descent.
    pub(super) fn enter(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Checks a freshly built node's height against the limit.
    pub(super) fn check_height(&self, height: usize, position: usize) -> ParseResult<usize> {
        if height > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }
        Ok(height)
    }

    /// Builds a binary node from two parsed operands.
    pub(super) fn combine(&self,
                          left: Parsed,
                          op: BinaryOperator,
                          right: Parsed,
                          position: usize)
                          -> ParseResult<Parsed> {
        let height = self.check_height(left.height.max(right.height) + 1, position)?;
        Ok(Parsed { expr: Expr::BinaryOp { left: Box::new(left.expr),
                                           op,
                                           right: Box::new(right.expr),
                                           position },
                    height })
    }

    pub(super) fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { position: self.end }
    }
}

/// Lexes and parses `source` into an expression tree.
///
/// # Errors
/// Returns a [`ParseError`] for anything that is not a complete arithmetic
/// expression, or that nests deeper than the effective depth limit.
///
/// # Example
/// ```
/// use sandcalc::{Limits, interpreter::parser::core::parse};
///
/// let expr = parse("2 + 3 * 4", &Limits::default()).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse("2 +", &Limits::default()).is_err());
/// ```
pub fn parse(source: &str, limits: &Limits) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    Parser::new(tokens.iter(), source.len(), *limits).parse_expression()
}
