//! Core application

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::condition::{Condition, parse_condition};
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::{AppConfig, OutputConfig};
use crate::core::constants::{DEFAULT_LOG_FILTER, ENV_LOG};
use crate::sql::{self, ComparisonOp, PatternCode};
use crate::utils::path::{expand_path, is_stdin};

pub struct CondsqlApp {
    pub config: AppConfig,
}

impl CondsqlApp {
    /// Run the application with CLI argument parsing
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Operators) => {
                Self::print_operators();
                Ok(())
            }
            Some(Commands::Compile { input }) => Self::init(&cli_config)?.compile(input.as_deref()),
            None => Self::init(&cli_config)?.compile(None),
        }
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        Ok(Self { config })
    }

    /// Read a condition tree, compile it, and print the result
    fn compile(&self, input: Option<&Path>) -> Result<()> {
        let (text, source) = read_input(input)?;
        let condition = parse_condition(&text, &self.config.limits)
            .with_context(|| format!("Failed to load condition from {}", source))?;

        if sql::compile(&condition).is_none() {
            tracing::info!(source = %source, "Condition places no constraint");
        }
        if let Some(line) = output_line(&condition, &self.config.output) {
            println!("{}", line);
        }
        Ok(())
    }

    fn print_operators() {
        let comparison: Vec<&str> = ComparisonOp::tokens().collect();
        let pattern: Vec<&str> = PatternCode::tokens().collect();
        println!("comparison (exact case): {}", comparison.join(" "));
        println!("pattern (any case):      {}", pattern.join(" "));
        println!("negation prefix:         \"NOT \" or \"not \"");
    }

    fn init_logging() {
        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}

/// Render a condition tree according to the output settings
///
/// Returns `None` when the tree places no constraint.
pub fn render(condition: &Condition, output: &OutputConfig) -> Option<String> {
    if output.where_keyword {
        return sql::where_clause(condition);
    }
    let clause = sql::compile(condition)?;
    Some(if output.trim {
        clause.trimmed().to_string()
    } else {
        clause.into_string()
    })
}

/// The line `compile` prints, or `None` when nothing is printed at all.
///
/// An unconstrained tree prints an empty line, except with `WHERE` output
/// where it prints nothing.
fn output_line(condition: &Condition, output: &OutputConfig) -> Option<String> {
    match render(condition, output) {
        Some(text) => Some(text),
        None if output.where_keyword => None,
        None => Some(String::new()),
    }
}

/// Read condition text from a file, or stdin when no path (or `-`) is given.
/// Returns the text and a display name for error messages.
fn read_input(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) if !is_stdin(path) => {
            let path = expand_path(&path.to_string_lossy());
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read condition file: {}", path.display()))?;
            Ok((text, path.display().to_string()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read condition from stdin")?;
            Ok((text, "stdin".to_string()))
        }
    }
}
