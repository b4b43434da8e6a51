use log::debug;
use phf::phf_map;

/// Lines starting with this byte are commands, never expressions.
pub const COMMAND_PREFIX: char = '/';

/// A session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/exit`
    Exit,

    /// `/help`
    Help,

    /// Anything else starting with `/`.
    Unknown(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Static command map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static COMMANDS: phf::Map<&'static str, Command> = phf_map! {
    "/exit" => Command::Exit,
    "/help" => Command::Help,
};

pub const HELP: &str = "\
Integer calculator. Enter an expression such as `2 + 3 * (4 - 1)`.
Operators: + - * / % and parentheses; division truncates.
Assign with `name = expression` (letters only), read back with `name`.
Commands: /help, /exit";

impl Command {
    /// Recognise a trimmed line as a command, or `None` if it is not one.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with(COMMAND_PREFIX) {
            return None;
        }

        let command: Command = COMMANDS
            .get(line)
            .cloned()
            .unwrap_or_else(|| Command::Unknown(line.to_string()));

        debug!("Recognised command {:?}", command);

        Some(command)
    }
}
