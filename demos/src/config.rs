//! Demo configuration.

use std::env::{self, VarError};

use log::debug;
use thiserror::Error;
use wayseek_maps::fixtures::SAMPLE_DLS_LIMITS;

/// Environment variable overriding the depth limits, e.g. `4,8,10`.
pub const LIMITS_ENV: &str = "WAYSEEK_DLS_LIMITS";

/// Invalid demo configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid depth limit {value:?}: {reason}")]
    InvalidLimit { value: String, reason: &'static str },

    #[error("no depth limits given")]
    NoLimits,

    #[error("WAYSEEK_DLS_LIMITS is not valid unicode")]
    NotUnicode,
}

/// Settings for the demo programs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Depth limits tried by the depth-limited demo, in order.
    pub dls_limits: Vec<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dls_limits: SAMPLE_DLS_LIMITS.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Defaults, with the depth limits taken from [`LIMITS_ENV`] if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(LIMITS_ENV) {
            Ok(raw) => {
                let dls_limits = parse_limits(&raw)?;
                debug!("depth limits from {LIMITS_ENV}: {dls_limits:?}");
                Ok(Self { dls_limits })
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }
}

/// Parse a comma-separated list of depth limits.
///
/// Blank entries are skipped. Negative or non-integer entries are rejected,
/// as is a list with no entries at all.
pub fn parse_limits(s: &str) -> Result<Vec<usize>, ConfigError> {
    let mut limits = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let value: i64 = part.parse().map_err(|_| ConfigError::InvalidLimit {
            value: part.to_string(),
            reason: "not an integer",
        })?;
        let limit = usize::try_from(value).map_err(|_| ConfigError::InvalidLimit {
            value: part.to_string(),
            reason: "depth limits cannot be negative",
        })?;
        limits.push(limit);
    }
    if limits.is_empty() {
        return Err(ConfigError::NoLimits);
    }
    Ok(limits)
}
