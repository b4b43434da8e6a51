use crate::error::{EvalError, Result};
use crate::token::Integer;
use log::{debug, info};
use std::collections::HashMap;

/// Session‑wide mapping from variable name to its last assigned value.
///
/// There is no deletion; `define` creates or overwrites.  The table is passed
/// by `&mut` into every statement, so there is no global state.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    values: HashMap<String, Integer>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            values: HashMap::new(),
        }
    }

    /// Create or overwrite `name`.  Last write wins.
    pub fn define(&mut self, name: &str, value: Integer) {
        let previous: Option<Integer> = self.values.insert(name.to_string(), value);

        info!(
            "Variable '{}' set to {} (previous: {:?})",
            name, value, previous
        );
    }

    /// Current value of `name`, or `UnknownVariable`.
    pub fn get(&self, name: &str) -> Result<Integer> {
        match self.values.get(name) {
            Some(value) => {
                debug!("Lookup '{}' => {}", name, value);
                Ok(*value)
            }
            None => Err(EvalError::unknown_variable(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
