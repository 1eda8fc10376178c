// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Controller configuration.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `SCAFFOLD_PAGE_SIZE` | `page_size` | `5` |
//! | `SCAFFOLD_VERBOSE_ERRORS` | `verbose_errors` | on in debug builds |

use thiserror::Error;

/// Environment variable holding the page size.
pub const PAGE_SIZE_VAR: &str = "SCAFFOLD_PAGE_SIZE";

/// Environment variable toggling verbose error summaries.
pub const VERBOSE_ERRORS_VAR: &str = "SCAFFOLD_VERBOSE_ERRORS";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable could not be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Variable name.
        key:   String,
        /// Raw value.
        value: String
    },

    /// Page size must be at least one.
    #[error("page size must be at least 1")]
    ZeroPageSize
}

/// Settings of a [`CrudController`](super::CrudController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Entities per index page.
    pub page_size: usize,

    /// Append the failure text to error summaries.
    pub verbose_errors: bool
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size:      5,
            verbose_errors: cfg!(debug_assertions)
        }
    }
}

impl ControllerConfig {
    /// Override the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override verbose error summaries.
    #[must_use]
    pub const fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    /// Check invariants.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroPageSize`] for a zero page size.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(self)
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for unparsable or invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for unparsable or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key:   PAGE_SIZE_VAR.to_owned(),
                value: raw.clone()
            })?;
        }

        if let Some(raw) = lookup(VERBOSE_ERRORS_VAR) {
            config.verbose_errors = parse_flag(&raw).ok_or_else(|| ConfigError::Invalid {
                key:   VERBOSE_ERRORS_VAR.to_owned(),
                value: raw.clone()
            })?;
        }

        config.validate()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None
    }
}
