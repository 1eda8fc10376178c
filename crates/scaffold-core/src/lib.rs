// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for metadata-driven CRUD scaffolding.
//!
//! An entity is described once by an [`EntityDescriptor`]: an ordered list
//! of members, each knowing how to read a value, a visible value, related
//! keys and allowed choices from an entity. A generic [`CrudController`]
//! uses that description to list, show, create, edit and delete any entity
//! type against a [`Repository`].
//!
//! # Overview
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`access`] | Static field-accessor table used for binding and validation |
//! | [`member`] | Single- and multi-value member descriptors with builders |
//! | [`descriptor`] | [`EntityDescriptor`], [`Describe`] and the descriptor cache |
//! | [`rules`] | [`RuleViolation`], [`RuleViolationChain`] and [`Validate`] |
//! | [`paging`] | [`PagedList`], [`Pagination`] and page clamping |
//! | [`projection`] | [`ModelInstance`], [`IndexModel`] and snapshots |
//! | [`repository`] | [`Repository`] contract and [`MemoryRepository`] |
//! | [`controller`] | [`CrudController`] and its action results |
//!
//! # Usage
//!
//! ```rust,ignore
//! use scaffold_core::prelude::*;
//!
//! let descriptor = DescriptorCache::global().get_or_describe::<Product>(&categories)?;
//! let controller = CrudController::new(products, descriptor)
//!     .with_config(ControllerConfig::from_env()?);
//!
//! let result = controller.index(Some(2), &mut TempData::new())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod access;
pub mod controller;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod member;
pub mod paging;
pub mod prelude;
pub mod projection;
pub mod repository;
pub mod rules;

pub use access::{
    BindError, FieldAccess, FieldKind, FieldMeta, FieldValue, optional_text, parse_optional,
    parse_value
};
pub use controller::{
    ActionResult, ConfigError, ControllerConfig, CrudController, CrudHooks, FormValues, HookError,
    ModelError, ModelState, NoHooks, Redirect, TempData, ViewModel, ViewName, ViewResult
};
pub use descriptor::{
    DescriptorCache, DescriptorError, Describe, EntityDescriptor, EntityDescriptorBuilder
};
pub use entity::ModelEntity;
pub use error::ScaffoldError;
pub use member::{
    ChoicesSelector, Member, MemberDisplay, MultiValueMember, MultiValueMemberBuilder,
    SingleValueMember, SingleValueMemberBuilder, ValueSelector, ValuesSelector
};
pub use paging::{
    PageLink, PagedList, Pagination, PrevNext, clamp_page_index, page_links, total_pages
};
pub use projection::{
    ChoiceItem, IndexModel, IndexSnapshot, InstanceSnapshot, MemberPresentation, MemberSnapshot,
    MemberValue, ModelInstance, MultiMemberValue, PageInfo, RelatedLink, SingleMemberValue,
    SnapshotValue, ViewMode
};
pub use repository::{KeyAssigner, MemoryRepository, Repository, RepositoryError};
pub use rules::{RuleViolation, RuleViolationChain, RuleViolations, Validate};
