//! # Configuration Module
//!
//! Environment-driven settings for helper generation.
//!
//! ## Environment Variables
//!
//! ### `ROUTE_HELPERS_DEFAULT_FORMAT`
//!
//! Extension appended when a call passes no `format`. Leading `.` optional;
//! an empty value makes helpers extensionless by default.
//!
//! Default: `json`
//!
//! ### `ROUTE_HELPERS_ON_DUPLICATE`
//!
//! What the registry does when two routes derive the same helper name:
//! `reject` (fail installation), `keep_first`, or `overwrite`.
//!
//! Default: `reject`
//!
//! ### `ROUTE_HELPERS_SUFFIX`
//!
//! Suffix of every generated helper name.
//!
//! Default: `_path`
//!
//! Invalid values fall back to the default.
//!
//! ## Usage
//!
//! ```rust
//! use route_helpers::config::HelperConfig;
//!
//! let config = HelperConfig::from_env();
//! println!("default format: {}", config.default_format);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::naming::DEFAULT_SUFFIX;
use crate::resolver::DEFAULT_FORMAT;

pub const ENV_DEFAULT_FORMAT: &str = "ROUTE_HELPERS_DEFAULT_FORMAT";
pub const ENV_ON_DUPLICATE: &str = "ROUTE_HELPERS_ON_DUPLICATE";
pub const ENV_SUFFIX: &str = "ROUTE_HELPERS_SUFFIX";

/// Registry behaviour when a helper name is installed twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnDuplicate {
    /// Fail installation with `DuplicateHelper`
    #[default]
    Reject,
    /// Keep the helper installed first, skip later ones
    KeepFirst,
    /// Replace the earlier helper with the later one
    Overwrite,
}

impl FromStr for OnDuplicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "reject" | "error" => Ok(OnDuplicate::Reject),
            "keep_first" | "first" => Ok(OnDuplicate::KeepFirst),
            "overwrite" | "last" => Ok(OnDuplicate::Overwrite),
            other => Err(format!("unknown duplicate policy '{}'", other)),
        }
    }
}

impl fmt::Display for OnDuplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnDuplicate::Reject => "reject",
            OnDuplicate::KeepFirst => "keep_first",
            OnDuplicate::Overwrite => "overwrite",
        };
        write!(f, "{}", s)
    }
}

/// Settings applied when decorating routes and installing helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Default extension without the leading `.` (empty = none)
    pub default_format: String,
    pub on_duplicate: OnDuplicate,
    pub suffix: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_FORMAT.to_string(),
            on_duplicate: OnDuplicate::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl HelperConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_format = lookup(ENV_DEFAULT_FORMAT)
            .map(|v| v.trim().trim_start_matches('.').to_string())
            .unwrap_or(defaults.default_format);

        let on_duplicate = lookup(ENV_ON_DUPLICATE)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.on_duplicate);

        let suffix = lookup(ENV_SUFFIX)
            .filter(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(defaults.suffix);

        Self {
            default_format,
            on_duplicate,
            suffix,
        }
    }

    #[must_use]
    pub fn with_on_duplicate(mut self, policy: OnDuplicate) -> Self {
        self.on_duplicate = policy;
        self
    }
}
