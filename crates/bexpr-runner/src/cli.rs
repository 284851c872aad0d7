use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bexpr")]
#[command(about = "Evaluate a boolean/arithmetic expression against integer variables")]
pub struct Cli {
    /// Expression to evaluate, e.g. "(A > 3) AND B <= 2".
    #[arg(short, long)]
    pub input: String,
    /// Comma separated NAME=VALUE pairs, e.g. "A=100,B=45".
    #[arg(short = 'V', long, default_value = "")]
    pub variables: String,
    /// YAML or JSON file with a `variables` map; --variables entries win.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Fail when tokens remain after a complete expression.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Also print the parse tree.
    #[arg(long, default_value_t = false)]
    pub tree: bool,
    /// Log to stderr; repeat for trace output.
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
