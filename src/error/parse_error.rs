use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// The token after the current one was not what the grammar requires.
    UnexpectedToken {
        /// The kind the parser required next.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
    },
    /// No expression can start with the current token.
    NoPrefixParser {
        /// The kind that has no prefix parse rule.
        found: TokenKind,
    },
    /// An integer literal did not fit into a signed 64-bit value.
    InvalidIntegerLiteral {
        /// The offending digits, exactly as written.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found}")
            },

            Self::NoPrefixParser { found } => {
                write!(f, "no prefix parse function for {found} found")
            },

            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
