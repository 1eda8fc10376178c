// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mutation hooks.
//!
//! Hooks run after binding and validation succeed and before the
//! repository is touched. Returning an error aborts the action the same
//! way a failed save does.
//!
//! # Usage
//!
//! ```rust,ignore
//! struct ProductHooks;
//!
//! impl CrudHooks<Product> for ProductHooks {
//!     fn before_create(&self, product: &mut Product) -> Result<(), HookError> {
//!         product.name = product.name.trim().to_owned();
//!         Ok(())
//!     }
//!
//!     fn before_delete(&self, product: &Product) -> Result<(), HookError> {
//!         if product.in_stock > 0 {
//!             return Err(HookError::rejected("products in stock cannot be deleted"));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use thiserror::Error;

use crate::rules::RuleViolation;

/// Failure raised by a hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The hook refused the operation.
    #[error("{0}")]
    Rejected(String),

    /// The hook found entity-specific rule violations.
    #[error("{} rule violation(s)", .0.len())]
    Violations(Vec<RuleViolation>)
}

impl HookError {
    /// Refuse the operation with a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Violations to show next to the form fields.
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Self::Violations(v) => v,
            Self::Rejected(_) => &[]
        }
    }
}

/// Override points around controller mutations.
///
/// All methods default to no-ops.
pub trait CrudHooks<E>: Send + Sync {
    /// Called before an edited entity is updated.
    ///
    /// # Errors
    ///
    /// Aborts the edit.
    fn before_edit(&self, entity: &mut E) -> Result<(), HookError> {
        let _ = entity;
        Ok(())
    }

    /// Called before a new entity is added.
    ///
    /// # Errors
    ///
    /// Aborts the create.
    fn before_create(&self, entity: &mut E) -> Result<(), HookError> {
        let _ = entity;
        Ok(())
    }

    /// Called before an entity is deleted.
    ///
    /// # Errors
    ///
    /// Aborts the delete.
    fn before_delete(&self, entity: &E) -> Result<(), HookError> {
        let _ = entity;
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl<E> CrudHooks<E> for NoHooks {}
