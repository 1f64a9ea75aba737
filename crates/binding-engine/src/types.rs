use body_types::{ParameterId, UnknownParameter};

/// Errors from the binding engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameter),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Problems found while parsing or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("parameter {id} has invalid range [{min}, {max}]")]
    InvalidRange { id: ParameterId, min: f64, max: f64 },

    #[error("default {default} of parameter {id} lies outside its range")]
    DefaultOutOfRange { id: ParameterId, default: f64 },

    #[error("parameter {id} is not configured")]
    MissingParameter { id: ParameterId },

    #[error("parameter {id} is specified more than once")]
    DuplicateParameter { id: ParameterId },

    #[error("parameter {id} has more than one rule")]
    DuplicateRule { id: ParameterId },

    #[error("rule for {id} divides by {divisor}")]
    InvalidDivisor { id: ParameterId, divisor: f64 },
}
