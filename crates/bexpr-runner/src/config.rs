use crate::variables::validate_variable_name;
use bexpr_eval::Variables;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub variables: Variables,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            variables: Variables::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config placeholder error: {0}")]
    Placeholder(#[from] PlaceholderError),
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("`${{` at {0} has no closing `}}`")]
    Unterminated(usize),
    #[error("empty `${{}}` at {0}")]
    Empty(usize),
    #[error("environment variable `{0}` is not set")]
    Unset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Guess,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Guess,
        }
    }
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let text = expand_env_placeholders(&raw)?;
    let config = decode_config(&text, ConfigFormat::from_path(path))?;

    let issues = validate_runner_config(&config);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    log::debug!(
        "loaded {} variable(s) from `{}`",
        config.variables.len(),
        path.display()
    );
    Ok(config)
}

fn decode_config(text: &str, format: ConfigFormat) -> Result<RunnerConfig, RunnerConfigError> {
    let decoded = match format {
        ConfigFormat::Json => {
            serde_json::from_str(text).map_err(|error| format!("json decode error: {error}"))
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|error| format!("yaml decode error: {error}"))
        }
        ConfigFormat::Guess => serde_yaml::from_str(text).or_else(|yaml_error| {
            serde_json::from_str(text)
                .map_err(|_| format!("not valid yaml or json: {yaml_error}"))
        }),
    };
    decoded.map_err(RunnerConfigError::Parse)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<String> {
    let mut issues = Vec::new();
    if config.schema != default_runner_schema() {
        issues.push(format!(
            "unsupported runner config schema `{}` (expected `{}`)",
            config.schema,
            default_runner_schema()
        ));
    }
    for name in config.variables.keys() {
        if let Err(error) = validate_variable_name(name) {
            issues.push(format!("variables.{name}: {error}"));
        }
    }
    issues
}

fn default_runner_schema() -> String {
    "bexpr-runner/0.0.1".to_string()
}

/// Replaces each `${NAME}` with the value of environment variable `NAME`.
fn expand_env_placeholders(raw: &str) -> Result<String, PlaceholderError> {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some((before, after)) = rest.split_once("${") {
        let offset = raw.len() - rest.len() + before.len();
        expanded.push_str(before);
        let (name, tail) = after
            .split_once('}')
            .ok_or(PlaceholderError::Unterminated(offset))?;
        if name.is_empty() {
            return Err(PlaceholderError::Empty(offset));
        }
        let value = std::env::var(name).map_err(|_| PlaceholderError::Unset(name.to_string()))?;
        expanded.push_str(&value);
        rest = tail;
    }
    expanded.push_str(rest);
    Ok(expanded)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
