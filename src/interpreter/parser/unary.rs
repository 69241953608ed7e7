use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parsed, Parser},
        value::Value,
    },
};

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses a unary expression.
    ///
    /// Unary operators are right-recursive, so `--2` parses as `-(-2)` and
    /// `-+2` as `-(+2)`. Each operator counts as one level of nesting.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-") unary
    ///            | primary
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Parsed> {
        let Some(&&(token, position)) = self.tokens.peek() else {
            return Err(self.end_of_input());
        };

        let op = match token {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };
        self.tokens.next();

        self.enter(position)?;
        let operand = self.parse_unary();
        self.leave();
        let operand = operand?;

        let height = self.check_height(operand.height + 1, position)?;
        Ok(Parsed { expr: Expr::UnaryOp { op,
                                          expr: Box::new(operand.expr),
                                          position },
                    height })
    }

    /// Parses a primary (atomic) expression: a number or a parenthesized
    /// expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" additive ")"
    /// ```
    fn parse_primary(&mut self) -> ParseResult<Parsed> {
        match self.tokens.next() {
            Some(&(Token::Integer(n), position)) => {
                Ok(Parsed::leaf(Expr::Number { value: Value::Integer(n),
                                               position }))
            },
            Some(&(Token::Float(x), position)) => {
                Ok(Parsed::leaf(Expr::Number { value: Value::Float(x),
                                               position }))
            },
            Some(&(Token::LParen, position)) => self.parse_grouping(position),
            Some(&(token, position)) => {
                Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                  position })
            },
            None => Err(self.end_of_input()),
        }
    }

    /// Parses the inside of a parenthesized group, after its `(` has been
    /// consumed.
    ///
    /// Parentheses only affect grouping; no node is created for them.
    ///
    /// # Errors
    /// - [`ParseError::ExpectedClosingParen`] if input ends before `)`.
    /// - [`ParseError::UnexpectedToken`] if something else is found where `)`
    ///   should be.
    fn parse_grouping(&mut self, open: usize) -> ParseResult<Parsed> {
        self.enter(open)?;
        let inner = self.parse_additive();
        self.leave();
        let inner = inner?;

        match self.tokens.next() {
            Some((Token::RParen, _)) => Ok(inner),
            Some(&(token, position)) => {
                Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                  position })
            },
            None => Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
}
