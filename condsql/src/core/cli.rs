use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_MAX_BYTES, ENV_MAX_DEPTH, ENV_NO_TRIM, ENV_WHERE};

#[derive(Parser)]
#[command(name = "condsql")]
#[command(
    version,
    about = "Compile JSON condition trees into SQLite WHERE clauses",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Maximum condition JSON size in bytes
    #[arg(long, global = true, env = ENV_MAX_BYTES)]
    pub max_bytes: Option<usize>,

    /// Maximum condition tree nesting depth
    #[arg(long, global = true, env = ENV_MAX_DEPTH)]
    pub max_depth: Option<usize>,

    /// Prefix output with WHERE (prints nothing when there is no constraint)
    #[arg(long = "where", global = true, env = ENV_WHERE)]
    pub where_keyword: bool,

    /// Keep the padding spaces around the compiled fragment
    #[arg(long, global = true, env = ENV_NO_TRIM)]
    pub no_trim: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Compile a condition tree (default command)
    Compile {
        /// JSON file to read; stdin when omitted or "-"
        input: Option<PathBuf>,
    },
    /// List recognised operator tokens
    Operators,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub max_bytes: Option<usize>,
    pub max_depth: Option<usize>,
    pub where_keyword: bool,
    pub no_trim: bool,
}

/// Parse CLI arguments and return config and command
pub fn parse() -> (CliConfig, Option<Commands>) {
    split(Cli::parse())
}

fn split(cli: Cli) -> (CliConfig, Option<Commands>) {
    let config = CliConfig {
        config: cli.config,
        max_bytes: cli.max_bytes,
        max_depth: cli.max_depth,
        where_keyword: cli.where_keyword,
        no_trim: cli.no_trim,
    };
    (config, cli.command)
}
