// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macro for the static field-accessor table of crud-scaffold.
//!
//! Use the `crud-scaffold` crate instead of depending on this one directly.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Default, ModelFields)]
//! #[model(rename_all = "PascalCase")]    // Optional, PascalCase is the default
//! pub struct Product {
//!     #[member(name = "ProductID")]      // Explicit member name
//!     pub product_id: i32,
//!
//!     #[column(db_type = "NVarChar(100) NOT NULL")]
//!     pub name: String,                  // Text, bounded to 100 chars
//!
//!     #[column(varchar = 500)]
//!     pub description: Option<String>,   // Optional text, bounded to 500 chars
//!
//!     pub price: f64,                    // Parsed with FromStr
//!
//!     #[member(skip)]                    // Not accessible by name
//!     pub row_version: u64,
//! }
//! ```
//!
//! # Generated Code
//!
//! | Item | Description |
//! |------|-------------|
//! | `FieldAccess::fields` | Static `FieldMeta` table in declaration order |
//! | `FieldAccess::field` | Getter dispatching on the member name |
//! | `FieldAccess::set_field` | Setter converting submitted text into the field type |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod model;

use proc_macro::TokenStream;

/// Derive `scaffold_core::FieldAccess` for a struct with named fields.
///
/// # Container Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `rename_all` | `"PascalCase"` | Case of derived member names: `"PascalCase"`, `"camelCase"`, `"snake_case"`, `"kebab-case"`, `"Title Case"` |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[member(name = "...")]` | Member name, overriding `rename_all` |
/// | `#[member(skip)]` | Leave the field out of the table |
/// | `#[column(varchar = N)]` | Maximum text length |
/// | `#[column(db_type = "NVarChar(N)")]` | Maximum text length from the first `Char(N)` |
///
/// # Field Types
///
/// `String` and `Option<String>` are text. Any other type must implement
/// `FromStr` and `Display`; `Option<T>` binds blank input to `None`.
///
/// # Errors
///
/// Enums, tuple structs and unit structs are rejected at compile time, as
/// are unknown `rename_all` values and malformed field attributes.
#[proc_macro_derive(ModelFields, attributes(model, member, column))]
pub fn derive_model_fields(input: TokenStream) -> TokenStream {
    model::derive(input)
}
