use bexpr_eval::{TokenKind, Variables};
use regex::Regex;
use std::sync::OnceLock;

// Same classes as the scanner's identifier run (`char::is_alphanumeric` or
// `_`); a leading ASCII digit would scan as a NUMBER instead.
const VARIABLE_NAME_PATTERN: &str = r"^[\p{Alphabetic}\p{N}_&&[^0-9]][\p{Alphabetic}\p{N}_]*$";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VariablesError {
    #[error("entry `{0}` is not in NAME=VALUE form")]
    MissingSeparator(String),
    #[error("invalid integer `{value}` for variable `{name}`")]
    InvalidValue { name: String, value: String },
    #[error("invalid variable name `{0}`")]
    InvalidName(String),
    #[error("`{0}` is a reserved word and cannot name a variable")]
    ReservedName(String),
}

/// Parses `NAME=VALUE,NAME2=VALUE2`. Blank input and blank entries are
/// skipped; a repeated name keeps its last value.
pub fn parse_variables(raw: &str) -> Result<Variables, VariablesError> {
    let mut variables = Variables::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let Some((name, value)) = entry.split_once('=') else {
            return Err(VariablesError::MissingSeparator(entry.to_string()));
        };
        let (name, value) = (name.trim(), value.trim());
        validate_variable_name(name)?;
        let parsed = value.parse::<i64>().map_err(|_| VariablesError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        variables.insert(name.to_string(), parsed);
    }
    Ok(variables)
}

/// A usable name must scan as a single IDENTIFIER token.
pub fn validate_variable_name(name: &str) -> Result<(), VariablesError> {
    if !name_pattern().is_match(name) {
        return Err(VariablesError::InvalidName(name.to_string()));
    }
    if TokenKind::keyword(name).is_some() {
        return Err(VariablesError::ReservedName(name.to_string()));
    }
    Ok(())
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VARIABLE_NAME_PATTERN).expect("valid regex"))
}

#[cfg(test)]
#[path = "variables_test.rs"]
mod tests;
