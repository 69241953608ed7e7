use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parsed, Parser},
    },
};

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Parsed> {
        let mut left = self.parse_multiplicative()?;
        while let Some(&&(token, position)) = self.tokens.peek()
              && let Some(op) = token_to_binary_operator(token)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.tokens.next();
            let right = self.parse_multiplicative()?;
            left = self.combine(left, op, right, position)?;
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Parsed> {
        let mut left = self.parse_unary()?;
        while let Some(&&(token, position)) = self.tokens.peek()
              && let Some(op) = token_to_binary_operator(token)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            self.tokens.next();
            let right = self.parse_unary()?;
            left = self.combine(left, op, right, position)?;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use sandcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Float(_) | Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}
