//! Statement resolution for the **calculator**.
//!
//! One pass over a line's tokens that:
//! 1. Classifies the line as a bare expression or a declaration
//!    (`name` lookup, `name = expression` assignment).
//! 2. Validates operand roles (left‑hand name, first right‑hand operand).
//! 3. Produces a *new* token sequence where every identifier has been replaced
//!    by a `NUMBER` token carrying its current value, then hands that sequence
//!    to the [`Evaluator`](crate::evaluator::Evaluator).
//!
//! The symbol table is written only after the right‑hand side evaluated
//! successfully, so a failing line never changes any binding.

use crate::cursor::TokenCursor;
use crate::environment::SymbolTable;
use crate::error::{EvalError, Result};
use crate::evaluator;
use crate::token::{is_letters_only, Integer, Token, TokenType};
use log::{debug, info};

/// The two forms a declaration line can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// A bare `name`.
    Lookup,

    /// `name = expression`.
    Assignment,
}

/// Transient classification of one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// Arithmetic with no bound name; variables may appear anywhere.
    Expression,

    /// Reads or writes the symbol table through a left‑hand name.
    Declaration(Declaration),
}

impl Statement {
    /// Decide the statement kind from the token sequence alone.
    ///
    /// Any `=` makes the line an assignment; a single identifier is a lookup;
    /// everything else is an expression.
    pub fn classify(tokens: &[Token<'_>]) -> Self {
        let assigns: bool = tokens.iter().any(|t| t.token_type == TokenType::EQUAL);

        if assigns {
            Statement::Declaration(Declaration::Assignment)
        } else if let [only] = tokens {
            if only.token_type == TokenType::IDENTIFIER {
                Statement::Declaration(Declaration::Lookup)
            } else {
                Statement::Expression
            }
        } else {
            Statement::Expression
        }
    }
}

/// Result of one successfully processed statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub statement: Statement,
    pub value: Integer,
}

/// Resolver: classifies a statement, resolves its names against the symbol
/// table and evaluates it.
pub struct Resolver<'env> {
    table: &'env mut SymbolTable,
}

impl<'env> Resolver<'env> {
    /// Create a new resolver bound to the session's symbol table.
    pub fn new(table: &'env mut SymbolTable) -> Self {
        debug!("Resolver instantiated over {} variable(s)", table.len());

        Resolver { table }
    }

    /// Classify, resolve and evaluate one tokenized line.
    pub fn resolve(&mut self, tokens: &[Token<'_>]) -> Result<Evaluation> {
        let statement: Statement = Statement::classify(tokens);

        info!("Line classified as {:?}", statement);

        let value: Integer = match statement {
            Statement::Expression => self.expression(tokens)?,
            Statement::Declaration(_) => self.declaration(tokens)?,
        };

        Ok(Evaluation { statement, value })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statement forms
    // ─────────────────────────────────────────────────────────────────────────

    fn expression(&self, tokens: &[Token<'_>]) -> Result<Integer> {
        let resolved: Vec<Token<'_>> =
            self.substitute(tokens, EvalError::InvalidIdentifier)?;

        evaluator::evaluate(&resolved)
    }

    fn declaration(&mut self, tokens: &[Token<'_>]) -> Result<Integer> {
        let mut cursor: TokenCursor<'_, '_> = TokenCursor::new(tokens);

        // ── left‑hand side ───────────────────────────────────────────────
        let lhs: &str = match cursor.get() {
            Some(token) => match token.name() {
                Some(name) if is_letters_only(name) => name,
                _ => {
                    return Err(EvalError::identifier(format!(
                        "'{}' cannot be assigned to",
                        token.lexeme
                    )));
                }
            },
            None => return Err(EvalError::expression("empty declaration")),
        };

        if tokens.len() == 1 {
            return self.table.get(lhs);
        }

        match cursor.get() {
            Some(token) if token.token_type == TokenType::EQUAL => {}
            other => {
                debug!("Expected '=' after '{}', found {:?}", lhs, other);
                return Err(EvalError::expression(format!("expected '=' after '{}'", lhs)));
            }
        }

        // ── right‑hand side ──────────────────────────────────────────────
        let rhs: &[Token<'_>] = &tokens[cursor.position()..];

        let first: &Token<'_> = match rhs.first() {
            Some(token) => token,
            None => return Err(EvalError::assignment(format!("nothing assigned to '{}'", lhs))),
        };

        // A leading name must be a well‑formed, known variable: `x = y` copies.
        if let Some(name) = first.name() {
            if !is_letters_only(name) {
                return Err(EvalError::assignment(format!("'{}' is not a valid operand", name)));
            }

            let copied: Integer = self.table.get(name)?;

            debug!("Copy from '{}' = {}", name, copied);
        }

        let resolved: Vec<Token<'_>> = self.substitute(rhs, EvalError::InvalidAssignment)?;
        let value: Integer = evaluator::evaluate(&resolved)?;

        self.table.define(lhs, value);

        Ok(value)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Name substitution
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy `tokens`, replacing every identifier with a `NUMBER` holding its
    /// current value.  A malformed name fails with `malformed`.
    fn substitute<'a>(&self, tokens: &[Token<'a>], malformed: EvalError) -> Result<Vec<Token<'a>>> {
        tokens
            .iter()
            .map(|token| match token.name() {
                Some(name) if !is_letters_only(name) => {
                    debug!("Malformed name '{}'", name);
                    Err(malformed)
                }
                Some(name) => {
                    let value: Integer = self.table.get(name)?;
                    Ok(Token::new(TokenType::NUMBER(value), token.lexeme))
                }
                None => Ok(*token),
            })
            .collect()
    }
}
