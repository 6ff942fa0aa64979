use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

/// Default nesting limit for record/list payloads.
pub const DEFAULT_MAX_DEPTH: usize = 32;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read decode config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid decode config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid decode config: max_depth must be at least 1")]
    ZeroDepth,
}

///
/// UnknownFieldPolicy
///
/// What the decoder does with payload keys the descriptor does not declare.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Fail with an unknown-field error.
    #[default]
    Reject,

    /// Drop the key and emit an observability event.
    Ignore,
}

///
/// DecodeConfig
///
/// ```toml
/// unknown_fields = "ignore"
/// coerce_numeric_strings = true
/// max_depth = 16
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    pub unknown_fields: UnknownFieldPolicy,

    /// Accept numeric primitives sent as JSON strings (ids usually are).
    pub coerce_numeric_strings: bool,

    pub max_depth: usize,
}

impl DecodeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
            coerce_numeric_strings: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(())
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
            coerce_numeric_strings: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
