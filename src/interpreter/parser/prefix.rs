use crate::{
    ast::{Expression, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the prefix position of an expression.
    ///
    /// This is the dispatch table of the Pratt parser's prefix rules, keyed
    /// on the current token:
    /// - identifiers and literals produce leaf nodes,
    /// - `!` and `-` produce unary applications,
    /// - `(` opens a grouped expression,
    /// - `if` and `fn` open their compound forms.
    ///
    /// Any other token has no prefix rule; a
    /// [`ParseError::NoPrefixParser`] is recorded and `None` returned.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(self.current.literal.clone())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Some(Expression::StringLiteral(self.current.literal.clone())),
            TokenKind::True => Some(Expression::Boolean(true)),
            TokenKind::False => Some(Expression::Boolean(false)),
            TokenKind::Bang => self.parse_unary(UnaryOperator::Not),
            TokenKind::Minus => self.parse_unary(UnaryOperator::Negate),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            found => {
                self.record(ParseError::NoPrefixParser { found });
                None
            },
        }
    }

    /// Converts the current `INT` token's digits into an integer node.
    ///
    /// The lexer only admits digit runs here, so the single failure mode is
    /// a literal too large for `i64`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral { literal:
                                                                    self.current.literal.clone(), });
                None
            },
        }
    }

    /// Parses a prefix operator application.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so unary operators
    /// are right-associative and bind tighter than any binary operator:
    /// `!-a` parses as `(!(-a))`.
    fn parse_unary(&mut self, operator: UnaryOperator) -> Option<Expression> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner expression is returned as-is; grouping exists only to
    /// override precedence and needs no node of its own.
    fn parse_grouped(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <consequence> }
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    fn parse_if(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek.kind == TokenKind::Else {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses a function literal of the form `fn(<params>) { <body> }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated parameter name list up to the closing `)`.
    ///
    /// An empty list (`fn() { ... }`) is allowed.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance();
            return Some(parameters);
        }

        self.advance();
        parameters.push(self.current.literal.clone());

        while self.peek.kind == TokenKind::Comma {
            self.advance();
            self.advance();
            parameters.push(self.current.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }
}
