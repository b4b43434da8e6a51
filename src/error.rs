//! Centralised error type for the **calculator core**.
//!
//! Every stage (scanner, resolver, evaluator) reports failure through one of
//! the five [`EvalError`] kinds.  Each kind aborts only the current line; the
//! session and its symbol table carry on untouched.
//!
//! The module **does not** print diagnostics itself

use log::info;
use thiserror::Error;

/// Canonical failure kinds of a single statement.
///
/// Callers match on the variant, never on the message text.  The `Display`
/// output is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvalError {
    /// More than one `=`, an `=` with nothing after it, or a malformed
    /// right‑hand side operand.
    #[error("Invalid assignment")]
    InvalidAssignment,

    /// Left‑hand side (or a referenced name) is not made of letters only.
    #[error("Invalid identifier")]
    InvalidIdentifier,

    /// Malformed operator sequence, unmatched parenthesis, dangling operator…
    #[error("Invalid expression")]
    InvalidExpression,

    /// A name was read that has never been assigned.
    #[error("Unknown variable")]
    UnknownVariable,

    /// `/` or `%` with a zero right operand.
    #[error("Division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Helper constructor for assignment failures.
    pub fn assignment<S: Into<String>>(reason: S) -> Self {
        let reason: String = reason.into();

        info!("Creating InvalidAssignment error: {}", reason);

        EvalError::InvalidAssignment
    }

    /// Helper constructor for identifier failures.
    pub fn identifier<S: Into<String>>(reason: S) -> Self {
        let reason: String = reason.into();

        info!("Creating InvalidIdentifier error: {}", reason);

        EvalError::InvalidIdentifier
    }

    /// Helper constructor for lexical and grammatical failures.
    pub fn expression<S: Into<String>>(reason: S) -> Self {
        let reason: String = reason.into();

        info!("Creating InvalidExpression error: {}", reason);

        EvalError::InvalidExpression
    }

    /// Helper constructor for lookups of unassigned names.
    pub fn unknown_variable(name: &str) -> Self {
        info!("Creating UnknownVariable error: name={}", name);

        EvalError::UnknownVariable
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, EvalError>;
