//! Module `scanner` implements a one‑pass lexer for a single calculator line.
//!
//! It turns one trimmed line (`&str`, never containing a newline) into a
//! sequence of [`Token`]s, skipping whitespace.  Scanning is done over the raw
//! bytes; every lexeme is a zero‑copy slice of the input line.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a str) -> Scanner<'a>`
//!   Create a new lexer over the input line.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token<'a>, EvalError>` for each raw token.  No line‑level
//!   validation is applied on this path.
//!
//! - `Scanner::tokenize(self) -> Result<Vec<Token<'a>>>`
//!   Scan the whole line and apply the line‑level rules below.  On failure no
//!   partial sequence is returned.
//!
//! # Rules (applied in order by `tokenize`)
//!
//! 1. More than one `=` in the line → `InvalidAssignment` (counted with `memchr`).
//! 2. Maximal runs: alphanumeric words (all digits → `NUMBER`, otherwise
//!    `IDENTIFIER`), single characters from `+ - * / % ( ) =`, whitespace skipped.
//! 3. A `-`/`+` that opens the line and is followed by a digit run is folded
//!    into one signed `NUMBER` token (lookahead in `scan_token`).
//! 4. `**`, `//` and `%%` → `InvalidExpression`.
//! 5. Two adjacent `NUMBER`s → `InvalidExpression`.
//! 6. Without an `=`, the last token must be a word or `)` → else `InvalidExpression`.

use crate::error::{EvalError, Result};
use crate::token::{Integer, Token, TokenType};
use log::{debug, info};
use memchr::memchr_iter;
use std::iter::FusedIterator;

/// A single pass **scanner / lexer** over one input line.  The lifetime `'a`
/// ties every emitted token's `lexeme` slice back to the line.
pub struct Scanner<'a> {
    text: &'a str,              // the whole line
    src: &'a [u8],              // same line, as bytes
    start: usize,               // index of the *first* byte of the current lexeme
    curr: usize,                // index *one past* the last byte examined
    emitted: usize,             // tokens produced so far (sign folding looks at 0)
    pending: Option<TokenType>, // recognised token kind waiting to be emitted
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        info!("Scanner created over {} bytes", text.len());

        Self {
            text,
            src: text.as_bytes(),
            start: 0,
            curr: 0,
            emitted: 0,
            pending: None,
        }
    }

    /// Scan the whole line and validate it as a token sequence.
    pub fn tokenize(self) -> Result<Vec<Token<'a>>> {
        let src: &[u8] = self.src;

        // ── 1. assignment count ──────────────────────────────────────────
        let equals: usize = memchr_iter(b'=', src).count();

        if equals > 1 {
            return Err(EvalError::assignment(format!(
                "{} '=' signs in one line",
                equals
            )));
        }

        // ── 2./3. raw scan, sign folding happens inside the scanner ──────
        let tokens: Vec<Token<'a>> = self.collect::<Result<Vec<_>>>()?;

        debug!("Raw scan produced {} tokens", tokens.len());

        // ── 4./5. pairwise checks ────────────────────────────────────────
        for pair in tokens.windows(2) {
            let (left, right) = (pair[0].token_type, pair[1].token_type);

            match (left, right) {
                (TokenType::STAR, TokenType::STAR)
                | (TokenType::SLASH, TokenType::SLASH)
                | (TokenType::PERCENT, TokenType::PERCENT) => {
                    return Err(EvalError::expression(format!(
                        "doubled operator '{}{}'",
                        pair[0].lexeme, pair[1].lexeme
                    )));
                }

                (TokenType::NUMBER(_), TokenType::NUMBER(_)) => {
                    return Err(EvalError::expression(format!(
                        "no operator between '{}' and '{}'",
                        pair[0].lexeme, pair[1].lexeme
                    )));
                }

                _ => {}
            }
        }

        // ── 6. trailing token (lines with '=' are checked by the resolver) ──
        if equals == 0 {
            if let Some(last) = tokens.last() {
                let closes: bool =
                    last.is_word() || last.token_type == TokenType::RIGHT_PAREN;

                if !closes {
                    return Err(EvalError::expression(format!(
                        "line ends with '{}'",
                        last.lexeme
                    )));
                }
            }
        }

        info!("Tokenized line into {} tokens", tokens.len());

        Ok(tokens)
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    /// Return the length of the input slice.
    #[inline(always)]
    const fn len(&self) -> usize {
        self.src.len()
    }

    /// Are we at (or past) the end of input?
    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it.  Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.src[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src[self.curr]
        }
    }

    /// Skip spaces and tabs starting at `self.curr`.
    #[inline(always)]
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\r') {
            self.curr += 1;
        }
    }

    /// Consume a maximal alphanumeric run and return it.
    fn word(&mut self) -> &'a str {
        let from: usize = self.curr;

        while self.peek().is_ascii_alphanumeric() {
            self.curr += 1;
        }

        &self.text[from..self.curr]
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* token starting at `self.curr`.  If the lexeme produces an
    /// actual token the kind is stored in `self.pending`.  Whitespace is
    /// skipped by returning `Ok(())` with `pending = None`.
    fn scan_token(&mut self) -> Result<()> {
        let b = self.advance();

        match b {
            // ── leading sign directly before digits folds into the literal ──
            b'-' | b'+' if self.emitted == 0 => {
                if let Some(n) = self.signed_literal(b == b'-')? {
                    self.pending = Some(TokenType::NUMBER(n));
                } else if b == b'-' {
                    self.pending = Some(TokenType::MINUS);
                } else {
                    self.pending = Some(TokenType::PLUS);
                }
            }

            // ── single‑character punctuators ──────────────────────────────
            b'+' => self.pending = Some(TokenType::PLUS),
            b'-' => self.pending = Some(TokenType::MINUS),
            b'*' => self.pending = Some(TokenType::STAR),
            b'/' => self.pending = Some(TokenType::SLASH),
            b'%' => self.pending = Some(TokenType::PERCENT),
            b'(' => self.pending = Some(TokenType::LEFT_PAREN),
            b')' => self.pending = Some(TokenType::RIGHT_PAREN),
            b'=' => self.pending = Some(TokenType::EQUAL),

            // ── whitespace ───────────────────────────────────────────────
            b' ' | b'\r' | b'\t' => {
                return Ok(());
            }

            // ── words: numbers and identifiers ───────────────────────────
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' => {
                self.curr -= 1;
                let word: &str = self.word();

                self.pending = Some(classify_word(word)?);
            }

            // ── unexpected character ─────────────────────────────────────
            _ => {
                let c: char = self.text[self.start..].chars().next().unwrap_or('?');

                return Err(EvalError::expression(format!(
                    "unexpected character '{}'",
                    c
                )));
            }
        }

        Ok(())
    }

    /// Lookahead after a leading sign: if (after optional whitespace) a run of
    /// digits follows, consume it and return the signed value.  Otherwise the
    /// position is restored and `None` is returned.
    fn signed_literal(&mut self, negative: bool) -> Result<Option<Integer>> {
        let save: usize = self.curr;

        self.skip_whitespace();

        if !self.peek().is_ascii_digit() {
            self.curr = save;
            return Ok(None);
        }

        let digits: &str = self.word();

        if !digits.bytes().all(|d| d.is_ascii_digit()) {
            debug!("Sign followed by word '{}', not folding", digits);
            self.curr = save;
            return Ok(None);
        }

        let out_of_range = || EvalError::expression(format!("literal '{}' out of range", digits));
        let magnitude: u64 = digits.parse::<u64>().map_err(|_| out_of_range())?;

        let value: Option<Integer> = if negative {
            (0 as Integer).checked_sub_unsigned(magnitude)
        } else {
            Integer::try_from(magnitude).ok()
        };

        debug!("Folded leading sign into literal {:?}", value);

        value.map(Some).ok_or_else(out_of_range)
    }
}

/// Decide whether an alphanumeric run is a number literal or an identifier.
fn classify_word(word: &str) -> Result<TokenType> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        let n: Integer = word.parse::<Integer>().map_err(|_| {
            EvalError::expression(format!("literal '{}' out of range", word))
        })?;

        Ok(TokenType::NUMBER(n))
    } else {
        Ok(TokenType::IDENTIFIER)
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        // Loop until we either emit a token, hit the end, or see an error.
        while !self.is_at_end() {
            self.start = self.curr;
            self.pending = None;

            if let Err(e) = self.scan_token() {
                // Errors are terminal for the line.
                self.curr = self.len();
                return Some(Err(e));
            }

            if let Some(tt) = self.pending.take() {
                let lex: &'a str = &self.text[self.start..self.curr];
                self.emitted += 1;

                return Some(Ok(Token::new(tt, lex)));
            }
            // Otherwise it was whitespace → continue loop.
        }

        None
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Convenience wrapper: scan and validate `line`.
pub fn tokenize(line: &str) -> Result<Vec<Token<'_>>> {
    Scanner::new(line).tokenize()
}
