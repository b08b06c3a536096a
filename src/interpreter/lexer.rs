use logos::Logos;

/// The closed set of token kinds produced by the [`Scanner`].
///
/// Keywords are matched case-insensitively, so `and`, `And` and `AND` all
/// produce [`TokenKind::And`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `XOR`
    Xor,
    /// `NOT`
    Not,
    /// A variable name such as `X` or `carry`.
    Identifier,
    /// End of input. Produced indefinitely once the input is exhausted.
    Eof,
    /// Any character the grammar does not recognize.
    Illegal,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Identifier => "IDENTIFIER",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        write!(f, "{kind}")
    }
}

/// A token together with its source position.
///
/// `line` and `column` are 1-based and point at the first character of the
/// token. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind:   TokenKind,
    /// The original-case name; present only for identifiers.
    pub value:  Option<String>,
    /// Source line, starting at 1.
    pub line:   usize,
    /// Source column, starting at 1.
    pub column: usize,
}

impl Token {
    /// Creates a token that carries no value.
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind,
               value: None,
               line,
               column }
    }

    /// Creates an identifier token holding `name`.
    #[must_use]
    pub const fn identifier(name: String, line: usize, column: usize) -> Self {
        Self { kind: TokenKind::Identifier,
               value: Some(name),
               line,
               column }
    }

    /// Returns the identifier name, or `None` for any other kind of token.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Identifier => self.value.as_deref(),
            _ => None,
        }
    }
}

/// Maps an alphabetic word to its keyword kind.
///
/// The comparison is made on the upper-cased word, so keyword matching is
/// case-insensitive.
///
/// # Example
/// ```
/// use boolcalc::interpreter::lexer::{TokenKind, keyword_kind};
///
/// assert_eq!(keyword_kind("xOr"), Some(TokenKind::Xor));
/// assert_eq!(keyword_kind("nand"), None);
/// ```
#[must_use]
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word.to_ascii_uppercase().as_str() {
        "AND" => Some(TokenKind::And),
        "OR" => Some(TokenKind::Or),
        "XOR" => Some(TokenKind::Xor),
        "NOT" => Some(TokenKind::Not),
        _ => None,
    }
}

/// Raw lexemes recognized by logos before keyword resolution and position
/// bookkeeping.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = ScanExtras)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String),
    #[token("\n", newline)]
    NewLine,
}

/// Position state carried by the lexer while scanning.
#[derive(Debug, Default)]
struct ScanExtras {
    /// The current line number, starting at 1.
    line:       usize,
    /// Byte offset at which the current line begins.
    line_start: usize,
}

fn newline(lex: &mut logos::Lexer<RawToken>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
}

/// Turns source text into tokens, one at a time.
///
/// Whitespace (space, tab, carriage return, newline) separates tokens and is
/// never reported. Once the input is exhausted every further call to
/// [`Scanner::next_token`] returns an EOF token at the end position.
///
/// # Example
/// ```
/// use boolcalc::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x and Y");
/// let first = scanner.next_token();
/// assert_eq!(first.kind, TokenKind::Identifier);
/// assert_eq!(first.value.as_deref(), Some("x"));
/// assert_eq!(scanner.next_token().kind, TokenKind::And);
/// assert_eq!(scanner.next_token().value.as_deref(), Some("Y"));
/// assert_eq!(scanner.next_token().kind, TokenKind::Eof);
/// assert_eq!(scanner.next_token().kind, TokenKind::Eof);
/// ```
pub struct Scanner<'src> {
    lexer:     logos::Lexer<'src, RawToken>,
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over the full input text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     RawToken::lexer_with_extras(source,
                                                      ScanExtras { line:       1,
                                                                   line_start: 0, }),
               exhausted: false, }
    }

    /// Returns the next token of the input.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.exhausted {
                return self.eof();
            }

            let Some(raw) = self.lexer.next() else {
                self.exhausted = true;
                continue;
            };

            let (line, column) = self.position(self.lexer.span().start);
            let token = match raw {
                Ok(RawToken::NewLine) => continue,
                Ok(RawToken::LParen) => Token::new(TokenKind::LParen, line, column),
                Ok(RawToken::RParen) => Token::new(TokenKind::RParen, line, column),
                Ok(RawToken::Word(word)) => match keyword_kind(&word) {
                    Some(kind) => Token::new(kind, line, column),
                    None => Token::identifier(word, line, column),
                },
                Err(()) => {
                    tracing::trace!(line,
                                    column,
                                    slice = self.lexer.slice(),
                                    "illegal character");
                    Token::new(TokenKind::Illegal, line, column)
                },
            };

            tracing::trace!(kind = %token.kind, line, column, "scanned token");
            return token;
        }
    }

    fn eof(&self) -> Token {
        let (line, column) = self.position(self.lexer.source().len());
        Token::new(TokenKind::Eof, line, column)
    }

    /// Converts a byte offset on the current line into a `(line, column)`
    /// pair.
    fn position(&self, offset: usize) -> (usize, usize) {
        let extras = &self.lexer.extras;
        let width = self.lexer
                        .source()
                        .get(extras.line_start..offset)
                        .map_or(offset.saturating_sub(extras.line_start), |s| s.chars().count());
        (extras.line, width + 1)
    }
}

/// Scans the whole input, returning every token up to and including the first
/// EOF.
///
/// # Example
/// ```
/// use boolcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("NOT (a)").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Not, TokenKind::LParen, TokenKind::Identifier, TokenKind::RParen,
///             TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
