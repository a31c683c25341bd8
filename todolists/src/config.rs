//! Application configuration.
//!
//! Read from environment variables with sensible defaults:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TODOLISTS_LOG` | tracing filter used when `RUST_LOG` is unset | [`DEFAULT_LOG_FILTER`] |
//! | `TODOLISTS_SEED` | start from the demo lists instead of an empty state | `false` |
//! | `TODOLISTS_NOTIFY_UNCHANGED` | run listeners for dispatches that change nothing | `true` |
//!
//! # Example
//!
//! ```
//! use todolists::config::AppConfig;
//!
//! let config = AppConfig::from_lookup(|key| match key {
//!     "TODOLISTS_SEED" => Some("yes".to_string()),
//!     _ => None,
//! })?;
//! assert!(config.seed_demo_data);
//! # Ok::<(), todolists::config::ConfigError>(())
//! ```

use thiserror::Error;
use todoboard_runtime::StoreConfig;

/// Filter used when neither `RUST_LOG` nor `TODOLISTS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todolists=info,todoboard_runtime=info";

const LOG_VAR: &str = "TODOLISTS_LOG";
const SEED_VAR: &str = "TODOLISTS_SEED";
const NOTIFY_UNCHANGED_VAR: &str = "TODOLISTS_NOTIFY_UNCHANGED";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held something other than a boolean
    #[error("Invalid value for {key}: {value:?} (expected true/false, yes/no, on/off or 1/0)")]
    InvalidBool {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// The log filter was set but empty
    #[error("{key} is set but empty")]
    EmptyLogFilter {
        /// Variable name
        key: &'static str,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default tracing filter directive
    pub log_filter: String,
    /// Start from the demo lists
    pub seed_demo_data: bool,
    /// Store behaviour
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_demo_data: false,
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_VAR) {
            if filter.trim().is_empty() {
                return Err(ConfigError::EmptyLogFilter { key: LOG_VAR });
            }
            config.log_filter = filter;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed_demo_data = parse_bool(SEED_VAR, &value)?;
        }

        if let Some(value) = lookup(NOTIFY_UNCHANGED_VAR) {
            config.store = config
                .store
                .with_notify_unchanged(parse_bool(NOTIFY_UNCHANGED_VAR, &value)?);
        }

        Ok(config)
    }

    /// Set the default log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set whether to start from the demo lists
    #[must_use]
    pub const fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Set the store configuration
    #[must_use]
    pub const fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
