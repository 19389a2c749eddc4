use logos::Logos;

/// Classifies a minimal meaningful unit of Monna source text.
///
/// The kind set is closed: every byte of input maps to exactly one of these
/// kinds. Keywords are listed as explicit tokens so that they win over the
/// identifier pattern when both match the same lexeme.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or parameter names such as `x` or `adder`.
    #[regex("[A-Za-z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`. The digits are kept as text and
    /// converted by the parser.
    #[regex("[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`. No escape sequences are
    /// recognized; the literal is everything between the quotes.
    #[regex(r#""[^"]*""#)]
    Str,

    /// Any byte the patterns above do not cover.
    Illegal,
    /// End of input. Produced forever once the source is exhausted.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A token paired with the exact source text that produced it.
///
/// For string literals the surrounding quotes are stripped, so `literal`
/// holds the interior bytes. The `Eof` token carries an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Which member of the closed kind set this token is.
    pub kind:    TokenKind,
    /// The source substring behind the token.
    pub literal: String,
}

/// Pull-based tokenizer over a source string.
///
/// The lexer yields one token per call to [`Lexer::next_token`]. Whitespace
/// is skipped between tokens, unrecognized bytes come back as
/// [`TokenKind::Illegal`], and once the input is exhausted every further
/// call yields [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use monna::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().literal, "5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer reading from the given source string.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Returns the next token in the source.
    ///
    /// # Returns
    /// The next [`Token`], or an `Eof` token once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(kind)) => {
                let slice = self.inner.slice();
                let literal = if kind == TokenKind::Str {
                    slice[1..slice.len() - 1].to_owned()
                } else {
                    slice.to_owned()
                };
                Token { kind, literal }
            },
            Some(Err(())) => Token { kind:    TokenKind::Illegal,
                                     literal: self.inner.slice().to_owned(), },
            None => Token { kind:    TokenKind::Eof,
                            literal: String::new(), },
        }
    }
}
