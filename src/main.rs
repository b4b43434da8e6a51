use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use smart_calc::command::Command;
use smart_calc::interpreter::Interpreter;
use smart_calc::repl::Session;
use smart_calc::scanner::Scanner;

#[derive(ClapParser, Debug)]
#[command(version, about = "Interactive integer calculator with variables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    /// Enable logging to smart-calc.log
    #[arg(long, global = true)]
    log: bool,

    /// Print the value of assignment statements too
    #[arg(long, global = true)]
    echo_assignments: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reads lines from stdin and evaluates them (default)
    Repl,

    /// Tokenizes every line of a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print each line's tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Evaluates every line of a file as if typed into the REPL
    Evaluate { filename: PathBuf },
}

/// Reads the contents of a file into a String
fn read_file(filename: &Path) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("smart-calc.log").context("Failed to create smart-calc.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'smart_calc::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("smart_calc::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}] [{}:{}] - {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to smart-calc.log");
    Ok(())
}

/// Prints the tokens of every expression line; returns `false` if any line
/// failed to tokenize.
fn tokenize_file(source: &str, json: bool) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tokenized = true;

    for line in source.lines().map(str::trim) {
        if line.is_empty() || Command::parse(line).is_some() {
            continue;
        }

        match Scanner::new(line).tokenize() {
            Ok(tokens) => {
                debug!("Scanned {} tokens from {:?}", tokens.len(), line);

                if json {
                    let encoded: String = serde_json::to_string(&tokens)
                        .context("Failed to encode tokens as JSON")?;
                    writeln!(out, "{}", encoded)?;
                } else {
                    for token in &tokens {
                        writeln!(out, "{}", token)?;
                    }
                }
            }

            Err(e) => {
                tokenized = false;

                debug!("Tokenization debug: {:?}", e);

                eprintln!("{}: {}", line, e);
            }
        }
    }

    Ok(tokenized)
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let interpreter = Interpreter::new().with_echo_assignments(args.echo_assignments);

    match args.commands.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            info!("Running Repl subcommand");

            let stdin = io::stdin();
            let stdout = io::stdout();
            let exit = Session::new(interpreter).run(stdin.lock(), stdout.lock())?;

            info!("Repl finished: {:?}", exit);
        }

        Commands::Tokenize { filename, json } => {
            info!("Running Tokenize subcommand");

            let source: String = read_file(&filename)?;

            if !tokenize_file(&source, json)? {
                debug!("Tokenization failed, exiting with code 65");

                std::process::exit(65);
            }

            info!("Tokenization completed successfully");
        }

        Commands::Evaluate { filename } => {
            info!("Running Evaluate subcommand");

            let source: String = read_file(&filename)?;
            let stdout = io::stdout();
            let exit = Session::new(interpreter).run(source.as_bytes(), stdout.lock())?;

            info!("Evaluate finished: {:?}", exit);
        }
    }

    Ok(())
}
