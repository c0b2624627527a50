use thiserror::Error;

use crate::parse::DEFAULT_MAX_DEPTH;

/// Environment variable read by [`Options::from_env`].
pub const MAX_DEPTH_VAR: &str = "EXPR_MAX_DEPTH";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{0}` must be a positive integer, got `{1}`")]
    InvalidMaxDepth(&'static str, String),
}

/// Per-call evaluation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest allowed nesting of parentheses and unary minus.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    pub fn with_max_depth(max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(MAX_DEPTH_VAR, "0".to_string()));
        }
        Ok(Self { max_depth })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(MAX_DEPTH_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        match raw.trim().parse::<usize>() {
            Ok(depth) => Self::with_max_depth(depth),
            Err(_) => Err(ConfigError::InvalidMaxDepth(MAX_DEPTH_VAR, raw.to_string())),
        }
    }
}
