use log::debug;
use serde::Serialize;
use std::fmt;
use std::mem;

/// Integer type every literal, variable and result is computed in.
pub type Integer = i64;

/// The different kinds of tokens recognized by the calculator scanner.
///
/// Only `NUMBER` carries data: the literal value, already sign‑folded when the
/// line starts with `-`/`+` directly followed by digits.  `IDENTIFIER` keeps its
/// text in the token's `lexeme`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize)]
pub enum TokenType {
    /// An integer literal
    #[serde(rename = "NUMBER")]
    NUMBER(Integer),

    /// A word that is not purely digits (variable name)
    IDENTIFIER,

    /// '+'
    PLUS,

    /// '-'
    MINUS,

    /// '*'
    STAR,

    /// '/'
    SLASH,

    /// '%'
    PERCENT,

    /// '('
    LEFT_PAREN,

    /// ')'
    RIGHT_PAREN,

    /// '='
    EQUAL,
}

impl TokenType {
    /// `true` for the five arithmetic operator kinds.
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::PLUS
                | TokenType::MINUS
                | TokenType::STAR
                | TokenType::SLASH
                | TokenType::PERCENT
        )
    }

    /// `true` for `+` and `-`, which may also appear in unary position.
    #[inline]
    pub fn is_sign(&self) -> bool {
        matches!(self, TokenType::PLUS | TokenType::MINUS)
    }

    /// Variant name without payload, as printed by the `tokenize` command.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::NUMBER(_) => "NUMBER",
            TokenType::IDENTIFIER => "IDENTIFIER",
            TokenType::PLUS => "PLUS",
            TokenType::MINUS => "MINUS",
            TokenType::STAR => "STAR",
            TokenType::SLASH => "SLASH",
            TokenType::PERCENT => "PERCENT",
            TokenType::LEFT_PAREN => "LEFT_PAREN",
            TokenType::RIGHT_PAREN => "RIGHT_PAREN",
            TokenType::EQUAL => "EQUAL",
        }
    }
}

impl PartialEq for TokenType {
    /// Two TokenTypes are equal if they share the same variant
    /// (ignoring any inner data). Uses `mem::discriminant` to compare.
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// A scanned token: its type and the exact slice of the line it came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The substring of the input line that produced this token.  For a
    /// sign‑folded literal it spans the sign and the digits.
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given type and lexeme.
    pub fn new(token_type: TokenType, lexeme: &'a str) -> Self {
        debug!("Creating new token: type={:?}, lexeme={}", token_type, lexeme);

        Self { token_type, lexeme }
    }

    /// Numeric value, if this is a `NUMBER` token.
    #[inline]
    pub fn number(&self) -> Option<Integer> {
        match self.token_type {
            TokenType::NUMBER(n) => Some(n),
            _ => None,
        }
    }

    /// Identifier text, if this is an `IDENTIFIER` token.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self.token_type {
            TokenType::IDENTIFIER => Some(self.lexeme),
            _ => None,
        }
    }

    /// Words are the alphanumeric runs: numbers and identifiers.
    #[inline]
    pub fn is_word(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::NUMBER(_) | TokenType::IDENTIFIER
        )
    }
}

/// `true` when `name` is non‑empty and made of ASCII letters only.
pub fn is_letters_only(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

impl<'a> fmt::Display for Token<'a> {
    /// `NUMBER -5 -5`, `IDENTIFIER x null`, `PLUS + null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::NUMBER(n) => {
                let mut buf: itoa::Buffer = itoa::Buffer::new();

                write!(f, "NUMBER {} {}", self.lexeme, buf.format(n))
            }

            tt => write!(f, "{} {} null", tt.name(), self.lexeme),
        }
    }
}
