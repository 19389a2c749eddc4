use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// Dispatch is on the current token; anything that is not a statement
    /// keyword is parsed as an expression statement.
    ///
    /// # Returns
    /// The parsed [`Statement`], or `None` after recording an error.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>;`.
    ///
    /// The trailing semicolon is optional; when present it is consumed so
    /// the statement loop does not see it again.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.current.literal.clone();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression>;` with an optional trailing semicolon.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return { value })
    }

    /// Parses a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression { expression })
    }

    /// Parses a `{ ... }` statement sequence.
    ///
    /// The current token must be the opening `{`. Parsing stops at the
    /// matching `}` or at end of input, whichever comes first; a missing
    /// closing brace is not itself an error here, the statements inside will
    /// have produced one.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.advance();

        while self.current.kind != TokenKind::RBrace && self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        BlockStatement { statements }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }
}
