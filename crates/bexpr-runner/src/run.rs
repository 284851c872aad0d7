use crate::cli::{Cli, OutputFormat};
use crate::config::{load_runner_config, RunnerConfigError};
use crate::variables::{parse_variables, VariablesError};
use bexpr_eval::{evaluate_tree, EvalError, ParseError, ParseNode, Parser, Value, Variables};
use serde_json::{json, Map};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("missing required --input expression")]
    MissingInput,
    #[error("invalid --variables: {0}")]
    Variables(#[from] VariablesError),
    #[error("{0}")]
    Config(#[from] RunnerConfigError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn execute(cli: &Cli) -> Result<String, RunnerError> {
    if cli.input.trim().is_empty() {
        return Err(RunnerError::MissingInput);
    }
    let variables = resolve_variables(cli.config.as_deref(), cli.variables.as_str())?;
    let tree = parse_input(cli.input.as_str(), cli.strict)?;
    let value = evaluate_tree(&tree, &variables)?;
    let result = value.truthy();
    log::debug!("`{}` evaluated to {value} ({result})", cli.input);

    match cli.format {
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if cli.tree {
                lines.push(format!("tree: {tree}"));
            }
            lines.push(format!("evaluated result is {result}"));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let mut report = Map::new();
            report.insert("expression".to_string(), json!(cli.input));
            report.insert("result".to_string(), json!(result));
            report.insert("value".to_string(), value_json(value));
            report.insert("variables".to_string(), json!(variables));
            if cli.tree {
                report.insert("tree".to_string(), json!(tree.to_string()));
            }
            serde_json::to_string_pretty(&report).map_err(RunnerError::from)
        }
    }
}

/// Merges the optional config file with `--variables`; command-line entries
/// override file entries.
pub fn resolve_variables(config: Option<&Path>, raw: &str) -> Result<Variables, RunnerError> {
    let mut variables = match config {
        Some(path) => load_runner_config(path)?.variables,
        None => Variables::new(),
    };
    variables.extend(parse_variables(raw)?);
    Ok(variables)
}

fn parse_input(input: &str, strict: bool) -> Result<ParseNode, RunnerError> {
    let mut parser = Parser::new(input)?;
    let tree = parser.parse(0)?;
    if strict {
        parser.expect_end()?;
    }
    Ok(tree)
}

fn value_json(value: Value) -> serde_json::Value {
    match value {
        Value::Int(number) => json!(number),
        Value::Bool(flag) => json!(flag),
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
