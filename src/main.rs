//! Calculator - Entry Point
//!
//! Sets up logging, parses arguments and runs the requested command.
//! With no command it runs the demonstration.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use calculator::catalog::{self, MODULE_DOC};
use calculator::config::{self, DEFAULT_LOG_LEVEL};
use calculator::{BinaryOp, Operand, demo};

/// Add and subtract integers.
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the demonstration (default).
    Demo,
    /// Print A + B.
    Add {
        /// Left operand.
        #[arg(allow_negative_numbers = true)]
        a: String,
        /// Right operand.
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
    /// Print A - B.
    Sub {
        /// Left operand.
        #[arg(allow_negative_numbers = true)]
        a: String,
        /// Right operand.
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
    /// List the exported functions.
    Functions {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_filter(level)));

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Evaluates a single operation and prints `A op B = R`.
fn evaluate(out: &mut impl Write, op: BinaryOp, a: &str, b: &str) -> Result<()> {
    let (a, b) = (Operand::parse(a), Operand::parse(b));
    let label = format!("{a} {} {b}", op.symbol());
    let result = op.apply(a, b)?;
    writeln!(out, "{label} = {result}").context("failed to write result")?;
    Ok(())
}

/// Prints the function catalog.
fn list_functions(out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "doc": MODULE_DOC,
            "functions": catalog::catalog(),
        });
        let text = serde_json::to_string_pretty(&value).context("failed to serialize catalog")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "{MODULE_DOC}")?;
        for function in catalog::catalog() {
            writeln!(out, "  {:<14} {}", function.path, function.doc)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = config::parse_log_level(&args.log_level)?;
    init_tracing(log_level)?;

    debug!(command = ?args.command, "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => demo::run(&mut out).context("demo failed")?,
        Command::Add { a, b } => evaluate(&mut out, BinaryOp::Add, &a, &b)?,
        Command::Sub { a, b } => evaluate(&mut out, BinaryOp::Sub, &a, &b)?,
        Command::Functions { json } => list_functions(&mut out, json)?,
    }

    Ok(())
}
