// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors that escape controller actions.
//!
//! Validation, hook and persistence failures during a mutation are
//! recovered inside the action. What remains are failures the caller has
//! to deal with: a repository that cannot be read, or a descriptor that
//! does not match its entity.

use std::error::Error as StdError;

use thiserror::Error;

use crate::{access::BindError, descriptor::DescriptorError};

/// Unrecoverable failure of a controller action.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Repository read failed outside a mutation.
    #[error("repository failure: {0}")]
    Repository(Box<dyn StdError + Send + Sync>),

    /// Descriptor names a member the entity has no field for.
    #[error("misconfigured descriptor: {0}")]
    Bind(#[from] BindError),

    /// Descriptor could not be built.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError)
}

impl ScaffoldError {
    /// Wrap a repository error.
    pub fn repository<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self::Repository(Box::new(error))
    }
}
