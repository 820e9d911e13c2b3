use std::fmt;

use logos::Logos;

/// The raw delimiter table fed to `logos`.
///
/// Every fixed delimiter is a token; everything between delimiters is a
/// `Symbol`. The symbol class is the complement of the delimiters, so every
/// input byte is claimed by some pattern and lexing cannot fail.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+")]
    Whitespace,
    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// `,`
    #[token(",")]
    Comma,
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
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `*`
    #[token("*")]
    Star,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `pow`
    #[token("pow")]
    Pow,
    /// Any run of characters that are not delimiters.
    #[regex(r"[^ \t\f\r\n,(){}\[\]:;=*+/^-]+", allow_greedy = true)]
    Symbol,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Spaces, tabs, carriage returns and newlines. Dropped by the cursor.
    Whitespace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// The word operator `pow`, a synonym for `^`.
    Pow,
    /// A name, number or keyword. The text is kept verbatim.
    Symbol,
    /// End of input. Never produced by the lexer; returned by the cursor for
    /// any out-of-range access.
    Invalid,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Whitespace | Lexeme::NewLine => Self::Whitespace,
            Lexeme::Comma => Self::Comma,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            Lexeme::LBrace => Self::LBrace,
            Lexeme::RBrace => Self::RBrace,
            Lexeme::LBracket => Self::LBracket,
            Lexeme::RBracket => Self::RBracket,
            Lexeme::Colon => Self::Colon,
            Lexeme::Semicolon => Self::Semicolon,
            Lexeme::Equals => Self::Equals,
            Lexeme::Star => Self::Star,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Slash => Self::Slash,
            Lexeme::Caret => Self::Caret,
            Lexeme::Pow => Self::Pow,
            Lexeme::Symbol => Self::Symbol,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Whitespace => "whitespace",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Equals => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::Pow => "'pow'",
            Self::Symbol => "symbol",
            Self::Invalid => "end of input",
        };
        f.write_str(text)
    }
}

/// A single lexical token with its source position.
///
/// Tokens are created once by [`tokenize`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The raw lexeme.
    pub text:   String,
    /// 1-based source line.
    pub line:   usize,
    /// Byte offset from the start of the source.
    pub offset: usize,
}

/// The not-found sentinel handed out by the cursor.
pub static INVALID_TOKEN: Token = Token::INVALID;

impl Token {
    /// The sentinel token. It is never produced by the lexer.
    pub const INVALID: Self = Self { kind:   TokenKind::Invalid,
                                     text:   String::new(),
                                     line:   0,
                                     offset: 0, };

    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, offset: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               offset }
    }

    /// Returns `false` only for the sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind != TokenKind::Invalid
    }

    /// Returns `true` if this is a symbol with exactly the given text.
    #[must_use]
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Symbol => write!(f, "symbol({})", self.text),
            kind => write!(f, "{kind}"),
        }
    }
}

/// Splits source text into tokens.
///
/// Delimiters come from a fixed table; any run of characters between them
/// becomes a `Symbol` verbatim. The word operator `pow` is a delimiter too, so
/// it is recognized even inside a run: `3pow2` lexes as `3`, `pow`, `2`.
/// Whitespace tokens are kept here and dropped later by the cursor.
///
/// There are no lexical errors: every input produces some token sequence.
///
/// # Example
/// ```
/// use bean::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("x = 3pow2").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Symbol,
///             TokenKind::Whitespace,
///             TokenKind::Equals,
///             TokenKind::Whitespace,
///             TokenKind::Symbol,
///             TokenKind::Pow,
///             TokenKind::Symbol]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;
        let text = lexer.slice();

        match lexeme {
            Ok(Lexeme::NewLine) => {
                tokens.push(Token::new(TokenKind::Whitespace, text, lexer.extras.line - 1, offset));
            },
            Ok(Lexeme::Symbol) | Err(()) => {
                push_symbol_run(&mut tokens, text, lexer.extras.line, offset);
            },
            Ok(lexeme) => {
                tokens.push(Token::new(TokenKind::from(lexeme), text, lexer.extras.line, offset));
            },
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens
}

/// Pushes a run of symbol characters, carving out every embedded `pow`.
fn push_symbol_run(tokens: &mut Vec<Token>, run: &str, line: usize, offset: usize) {
    let mut rest = run;
    let mut position = offset;

    while let Some(index) = rest.find("pow") {
        if index > 0 {
            tokens.push(Token::new(TokenKind::Symbol, &rest[..index], line, position));
        }
        tokens.push(Token::new(TokenKind::Pow, "pow", line, position + index));

        rest = &rest[index + 3..];
        position += index + 3;
    }

    if !rest.is_empty() {
        tokens.push(Token::new(TokenKind::Symbol, rest, line, position));
    }
}
