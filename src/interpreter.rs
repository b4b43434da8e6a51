use log::{debug, info};

use crate::environment::SymbolTable;
use crate::error::Result;
use crate::resolver::{Declaration, Evaluation, Resolver, Statement};
use crate::scanner::Scanner;
use crate::token::{Integer, Token};

/// Tokenize, resolve and evaluate one line against `table`.
///
/// Returns `Some(value)` for expressions and lookups, `None` for assignments
/// (their value is conventionally not echoed).  On error the table is left
/// exactly as it was.
pub fn process(line: &str, table: &mut SymbolTable) -> Result<Option<Integer>> {
    let evaluation: Evaluation = evaluate_line(line, table)?;

    Ok(match evaluation.statement {
        Statement::Declaration(Declaration::Assignment) => None,
        _ => Some(evaluation.value),
    })
}

/// Like [`process`] but always reports the statement kind and its value.
pub fn evaluate_line(line: &str, table: &mut SymbolTable) -> Result<Evaluation> {
    debug!("Processing line: {:?}", line);

    let tokens: Vec<Token<'_>> = Scanner::new(line).tokenize()?;

    Resolver::new(table).resolve(&tokens)
}

/// A calculator session: owns the symbol table for its whole lifetime.
#[derive(Debug, Default)]
pub struct Interpreter {
    table: SymbolTable,
    echo_assignments: bool,
}

impl Interpreter {
    /// Creates a new session with an empty symbol table.
    pub fn new() -> Self {
        info!("Initializing Interpreter");

        Self {
            table: SymbolTable::new(),
            echo_assignments: false,
        }
    }

    /// Choose whether assignment results are surfaced by [`process_line`](Self::process_line).
    pub fn with_echo_assignments(mut self, echo: bool) -> Self {
        debug!("Echo assignments: {}", echo);

        self.echo_assignments = echo;
        self
    }

    /// Process one line under this session's print policy.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Integer>> {
        if self.echo_assignments {
            return Ok(Some(evaluate_line(line, &mut self.table)?.value));
        }

        process(line, &mut self.table)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }
}
