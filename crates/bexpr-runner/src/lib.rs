mod cli;
mod config;
mod logger;
mod run;
mod variables;

pub use cli::{Cli, OutputFormat};
pub use config::{
    load_runner_config, validate_runner_config, PlaceholderError, RunnerConfig, RunnerConfigError,
};
pub use logger::{init_logger, level_for_verbosity, StderrLogger};
pub use run::{execute, resolve_variables, RunnerError};
pub use variables::{parse_variables, validate_variable_name, VariablesError};
