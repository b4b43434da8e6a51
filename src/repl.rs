//! Line‑oriented read loop around an [`Interpreter`].
//!
//! Generic over any `BufRead` / `Write` pair so the same loop drives stdin,
//! a script file, or an in‑memory buffer in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::command::{Command, HELP};
use crate::interpreter::Interpreter;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// `/exit` was entered.
    Command,

    /// Input ran out.
    EndOfInput,
}

pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    /// Read lines until `/exit` or end of input, writing results and error
    /// messages to `output`.  Statement errors never end the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<Exit> {
        info!("Session started");

        for (number, line) in input.lines().enumerate() {
            let line: String = line.context("Failed to read input line")?;
            let line: &str = line.trim();

            if line.is_empty() {
                continue;
            }

            debug!("Line {}: {:?}", number + 1, line);

            if let Some(command) = Command::parse(line) {
                let written = match command {
                    Command::Exit => {
                        writeln!(output, "Bye!").context("Failed to write output")?;
                        info!("Session ended by /exit");

                        return Ok(Exit::Command);
                    }

                    Command::Help => writeln!(output, "{}", HELP),

                    Command::Unknown(_) => writeln!(output, "Unknown command"),
                };

                written.context("Failed to write output")?;

                continue;
            }

            let written = match self.interpreter.process_line(line) {
                Ok(Some(value)) => writeln!(output, "{}", value),
                Ok(None) => Ok(()),
                Err(e) => {
                    debug!("Line {} failed: {:?}", number + 1, e);
                    writeln!(output, "{}", e)
                }
            };

            written.context("Failed to write output")?;
        }

        info!("Session ended at end of input");

        Ok(Exit::EndOfInput)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}
