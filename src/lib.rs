pub mod command;
pub mod cursor;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod repl;
pub mod resolver;
pub mod scanner;
pub mod token;

pub use environment::SymbolTable;
pub use error::EvalError;
pub use interpreter::{process, Interpreter};
