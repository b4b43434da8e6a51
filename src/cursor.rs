use crate::token::Token;
use log::debug;

/// Forward view over one statement's token buffer with a single step of
/// pushback.  The position always stays in `[0, len]`.
#[derive(Debug)]
pub struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        debug!("TokenCursor over {} tokens", tokens.len());

        Self { tokens, pos: 0 }
    }

    /// Return the token at the current position and advance, or `None` once
    /// the buffer is exhausted (end of stream is not an error).
    #[inline]
    pub fn get(&mut self) -> Option<&'t Token<'a>> {
        let token: Option<&'t Token<'a>> = self.tokens.get(self.pos);

        if token.is_some() {
            self.pos += 1;
        }

        token
    }

    /// Step back by one token, clamped at the start.
    #[inline]
    pub fn put_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `true` once every token has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
