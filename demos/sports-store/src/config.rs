// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Server configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SPORTS_STORE_ADDR` | `127.0.0.1:3000` |
//! | `SPORTS_STORE_PRODUCT_PAGE_SIZE` | `4` |
//! | `SCAFFOLD_PAGE_SIZE` | `5`, used for categories |
//! | `SCAFFOLD_VERBOSE_ERRORS` | on in debug builds |

use std::net::SocketAddr;

use crud_scaffold::{ConfigError, ControllerConfig};
use thiserror::Error;

/// Listen address variable.
pub const ADDR_VAR: &str = "SPORTS_STORE_ADDR";

/// Product page size variable.
pub const PRODUCT_PAGE_SIZE_VAR: &str = "SPORTS_STORE_PRODUCT_PAGE_SIZE";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000
);

const DEFAULT_PRODUCT_PAGE_SIZE: usize = 4;

/// Invalid server configuration.
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// Controller settings were rejected.
    #[error(transparent)]
    Controller(#[from] ConfigError),

    /// A server variable could not be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Variable name.
        key:   &'static str,
        /// Raw value.
        value: String
    }
}

/// Resolved server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Socket to listen on.
    pub addr: SocketAddr,

    /// Settings of the category controller.
    pub categories: ControllerConfig,

    /// Settings of the product controller.
    pub products: ControllerConfig
}

impl AppConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// [`AppConfigError`] for unparsable values.
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through a variable lookup.
    ///
    /// # Errors
    ///
    /// [`AppConfigError`] for unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let categories = ControllerConfig::from_lookup(&lookup)?;

        let addr = match lookup(ADDR_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| AppConfigError::Invalid {
                key:   ADDR_VAR,
                value: raw.clone()
            })?,
            None => DEFAULT_ADDR
        };

        let page_size = match lookup(PRODUCT_PAGE_SIZE_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| AppConfigError::Invalid {
                key:   PRODUCT_PAGE_SIZE_VAR,
                value: raw.clone()
            })?,
            None => DEFAULT_PRODUCT_PAGE_SIZE
        };
        let products = categories.with_page_size(page_size).validate()?;

        Ok(Self {
            addr,
            categories,
            products
        })
    }
}
