use crate::interpreter::lexer::{INVALID_TOKEN, Token, TokenKind};

/// A positional view over a token sequence.
///
/// The cursor owns its own copy of the tokens with whitespace already removed.
/// Its position starts *before* the first token, so the first [`advance`]
/// lands on index 0. Every index is clamped: asking for a token outside the
/// range yields the invalid sentinel instead of panicking, and the search
/// helpers report "not found" as `None`.
///
/// [`advance`]: TokenCursor::advance
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    tokens:   Vec<Token>,
    /// `None` means before-start.
    position: Option<usize>,
    /// Line used for diagnostics when the range is empty.
    line:     usize,
}

impl TokenCursor {
    /// Creates a cursor over `tokens`, dropping whitespace.
    ///
    /// # Example
    /// ```
    /// use bean::interpreter::{cursor::TokenCursor, lexer::tokenize};
    ///
    /// let cursor = TokenCursor::new(tokenize("1 + 2"));
    /// assert_eq!(cursor.len(), 3);
    /// assert!(!cursor.current().is_valid());
    /// ```
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens: Vec<Token> = tokens.into_iter()
                                       .filter(|t| t.kind != TokenKind::Whitespace)
                                       .collect();
        let line = tokens.first().map_or(1, |t| t.line);

        Self { tokens,
               position: None,
               line }
    }

    /// Number of tokens in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the view holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The current position, or `None` before the first [`advance`].
    ///
    /// [`advance`]: TokenCursor::advance
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// A line number suitable for diagnostics about this range.
    ///
    /// This is the line of the current token if there is one, otherwise the
    /// line of the first token, otherwise the line the range was cut next to.
    #[must_use]
    pub fn line(&self) -> usize {
        let current = self.current();
        if current.is_valid() {
            return current.line;
        }
        self.tokens.first().map_or(self.line, |t| t.line)
    }

    /// Iterates over every token of the view.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the token at `index`, or the sentinel if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&INVALID_TOKEN)
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        self.position.map_or(&INVALID_TOKEN, |i| self.get(i))
    }

    /// The token after the cursor, without moving.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.get(self.next_index())
    }

    /// The first token of the view.
    #[must_use]
    pub fn first(&self) -> &Token {
        self.get(0)
    }

    /// The last token of the view.
    #[must_use]
    pub fn last(&self) -> &Token {
        self.tokens.last().unwrap_or(&INVALID_TOKEN)
    }

    /// Moves one token forward and returns the new current token.
    ///
    /// Advancing past the end parks the cursor one past the last token.
    pub fn advance(&mut self) -> &Token {
        self.position = Some(self.next_index().min(self.tokens.len()));
        self.current()
    }

    /// Moves to `index`. Out-of-range targets leave the cursor where it is and
    /// yield the sentinel.
    pub fn jump(&mut self, index: usize) -> &Token {
        if index >= self.tokens.len() {
            return &INVALID_TOKEN;
        }
        self.position = Some(index);
        self.current()
    }

    /// Returns an independent cursor over `start..end`.
    ///
    /// Bounds are clamped, so an inverted or out-of-range request produces an
    /// empty view rather than an error.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.tokens.len());
        let start = start.min(end);

        let line = self.tokens
                       .get(start)
                       .or_else(|| start.checked_sub(1).and_then(|i| self.tokens.get(i)))
                       .map_or(self.line, |t| t.line);

        Self { tokens: self.tokens[start..end].to_vec(),
               position: None,
               line }
    }

    /// Returns the tokens after the current position as a new cursor.
    #[must_use]
    pub fn rest(&self) -> Self {
        self.slice(self.next_index(), self.tokens.len())
    }

    /// Finds the first token of `kind` after the current position without
    /// moving the cursor.
    #[must_use]
    pub fn find_first(&self, kind: TokenKind) -> Option<usize> {
        (self.next_index()..self.tokens.len()).find(|&i| self.tokens[i].kind == kind)
    }

    /// Finds the first `kind` after the current position that is not nested
    /// inside any `()` or `{}` pair.
    #[must_use]
    pub fn find_first_top_level(&self, kind: TokenKind) -> Option<usize> {
        let mut depth = 0usize;

        for i in self.next_index()..self.tokens.len() {
            let token_kind = self.tokens[i].kind;
            if depth == 0 && token_kind == kind {
                return Some(i);
            }
            match token_kind {
                TokenKind::LParen | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {},
            }
        }

        None
    }

    /// Scans forward from the current position and returns the index of the
    /// `close` that balances the first `open` seen.
    ///
    /// # Example
    /// ```
    /// use bean::interpreter::{
    ///     cursor::TokenCursor,
    ///     lexer::{TokenKind, tokenize},
    /// };
    ///
    /// let cursor = TokenCursor::new(tokenize("(a (b) c) d"));
    /// assert_eq!(cursor.find_matching(TokenKind::LParen, TokenKind::RParen), Some(6));
    /// ```
    #[must_use]
    pub fn find_matching(&self, open: TokenKind, close: TokenKind) -> Option<usize> {
        self.matching_from(self.next_index(), open, close)
    }

    fn matching_from(&self, start: usize, open: TokenKind, close: TokenKind) -> Option<usize> {
        let mut depth = 0usize;

        for i in start..self.tokens.len() {
            let kind = self.tokens[i].kind;
            if kind == open {
                depth += 1;
            } else if kind == close {
                if depth <= 1 {
                    return (depth == 1).then_some(i);
                }
                depth -= 1;
            }
        }

        None
    }

    /// Finds the rightmost `kind` at or after the current position, skipping
    /// over every balanced `( ... )` region so operators inside parentheses
    /// never match.
    #[must_use]
    pub fn find_rightmost(&self, kind: TokenKind) -> Option<usize> {
        let start = self.position.unwrap_or(0);
        let mut i = self.tokens.len();

        while i > start {
            i -= 1;
            let token_kind = self.tokens[i].kind;

            if token_kind == TokenKind::RParen {
                match self.matching_open(i) {
                    Some(open) if open >= start => {
                        i = open;
                        continue;
                    },
                    _ => return None,
                }
            }

            if token_kind == kind {
                return Some(i);
            }
        }

        None
    }

    /// Finds the rightmost occurrence of any of `kinds`, with the same
    /// parenthesis shielding as [`find_rightmost`].
    ///
    /// [`find_rightmost`]: TokenCursor::find_rightmost
    #[must_use]
    pub fn find_rightmost_of(&self, kinds: &[TokenKind]) -> Option<usize> {
        kinds.iter().filter_map(|&k| self.find_rightmost(k)).max()
    }

    /// Splits the whole view on `delimiter`.
    ///
    /// This split does not look at nesting: a delimiter inside parentheses
    /// splits just like one at the top level. Argument lists rely on this, so
    /// a nested call that itself takes several arguments cannot appear as an
    /// argument.
    ///
    /// # Example
    /// ```
    /// use bean::interpreter::{
    ///     cursor::TokenCursor,
    ///     lexer::{TokenKind, tokenize},
    /// };
    ///
    /// let parts = TokenCursor::new(tokenize("1, 2 + 3, x")).split(TokenKind::Comma);
    /// let sizes: Vec<_> = parts.iter().map(TokenCursor::len).collect();
    /// assert_eq!(sizes, [1, 3, 1]);
    /// ```
    #[must_use]
    pub fn split(&self, delimiter: TokenKind) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut start = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            if token.kind == delimiter {
                parts.push(self.slice(start, i));
                start = i + 1;
            }
        }
        parts.push(self.slice(start, self.tokens.len()));

        parts
    }

    /// Returns `true` if the first and last tokens are an `open`/`close` pair
    /// that encloses the entire view.
    #[must_use]
    pub fn is_wrapped(&self, open: TokenKind, close: TokenKind) -> bool {
        if self.tokens.len() < 2 || self.first().kind != open || self.last().kind != close {
            return false;
        }

        self.matching_from(0, open, close) == Some(self.tokens.len() - 1)
    }

    /// Removes the first and last token.
    pub fn strip_ends(&mut self) {
        if self.tokens.len() >= 2 {
            self.tokens.pop();
            let first = self.tokens.remove(0);
            self.line = first.line;
        }
        self.position = None;
    }

    /// Index of the token after the current one.
    fn next_index(&self) -> usize {
        self.position.map_or(0, |i| i + 1)
    }

    /// Walks left from the `)` at `close` to its balancing `(`.
    fn matching_open(&self, close: usize) -> Option<usize> {
        let mut depth = 0usize;

        for i in (0..=close).rev() {
            match self.tokens[i].kind {
                TokenKind::RParen => depth += 1,
                TokenKind::LParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                },
                _ => {},
            }
        }

        None
    }
}
