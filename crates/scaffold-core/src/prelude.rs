// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use scaffold_core::prelude::*;
//! ```

pub use crate::{
    ActionResult, ControllerConfig, CrudController, CrudHooks, Describe, DescriptorCache,
    DescriptorError, EntityDescriptor, FieldAccess, FormValues, HookError, MemberDisplay,
    MemoryRepository, ModelEntity, ModelInstance, MultiValueMember, PagedList, Redirect,
    Repository, RuleViolation, RuleViolationChain, ScaffoldError, SingleValueMember, TempData,
    Validate, ViewMode, ViewModel, ViewName
};
