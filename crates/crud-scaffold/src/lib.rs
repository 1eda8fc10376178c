// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata-driven CRUD scaffolding.
//!
//! Describe an entity once, derive its field table, and get paged listing,
//! details, create, edit and delete actions from a generic controller.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crud_scaffold::prelude::*;
//! use crud_scaffold::ModelFields;
//!
//! #[derive(Debug, Clone, Default, ModelFields)]
//! pub struct Category {
//!     #[member(name = "CategoryID")]
//!     pub category_id: u32,
//!
//!     #[column(db_type = "NVarChar(50) NOT NULL")]
//!     pub category_name: String,
//! }
//!
//! impl ModelEntity for Category {
//!     fn key(&self) -> String {
//!         self.category_id.to_string()
//!     }
//! }
//!
//! impl Validate for Category {
//!     fn rule_violations(&self) -> Vec<RuleViolation> {
//!         RuleViolationChain::new(self)
//!             .require_non_empty(["CategoryName"])
//!             .limit_length(["CategoryName"])
//!             .violations()
//!     }
//! }
//!
//! let controller = CrudController::new(categories, descriptor);
//! let result = controller.details(&1)?;
//! ```
//!
//! # Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `scaffold-core` | Descriptors, rules, paging, projection, repository, controller |
//! | `scaffold-derive-impl` | `#[derive(ModelFields)]` |
//!
//! Generated code refers to `::scaffold_core`, so depend on it alongside
//! this crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub use scaffold_core::*;
pub use scaffold_derive_impl::ModelFields;
