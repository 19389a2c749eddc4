use crate::{
    ast::{BinaryOperator, Expression},
    interpreter::{
        lexer::TokenKind,
        parser::{Parser, Precedence},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every kind that is not an infix operator.
///
/// # Example
/// ```
/// use monna::{ast::BinaryOperator, interpreter::lexer::TokenKind};
/// use monna::interpreter::parser::infix::token_to_binary_operator;
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LBrace), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a binary operator application with `left` already parsed.
    ///
    /// The current token is the operator. The right operand is parsed at the
    /// operator's own precedence, which makes every binary operator
    /// left-associative: `a + b + c` parses as `((a + b) + c)`.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> Option<Expression> {
        let operator = token_to_binary_operator(self.current.kind)?;
        let precedence = Precedence::of(self.current.kind);
        self.advance();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// Parses a call expression with the callee already parsed.
    ///
    /// The current token is the `(` that triggered the rule. Arguments are
    /// comma-separated expressions parsed at the lowest precedence, ending
    /// at the closing `)`.
    pub(in crate::interpreter::parser) fn parse_call(&mut self,
                                                     function: Expression)
                                                     -> Option<Expression> {
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance();
            return Some(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.kind == TokenKind::Comma {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
