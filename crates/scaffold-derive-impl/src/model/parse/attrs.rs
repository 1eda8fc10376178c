// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container attributes parsed with darling.
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `rename_all` | `PascalCase` | Case of derived member names |

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromMeta};
use syn::{Generics, Ident};

/// Case conversion from Rust field names to member names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    /// `product_id` → `ProductId`.
    #[default]
    Pascal,

    /// `product_id` → `productId`.
    Camel,

    /// `product_id` → `product_id`.
    Snake,

    /// `product_id` → `product-id`.
    Kebab,

    /// `product_id` → `Product Id`.
    Title
}

impl RenameRule {
    /// Apply the rule to a field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Camel => name.to_case(Case::Camel),
            Self::Snake => name.to_case(Case::Snake),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::Title => name.to_case(Case::Title)
        }
    }
}

impl FromMeta for RenameRule {
    /// Accepts serde-style case names.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "Title Case" => Ok(Self::Title),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// `#[model(...)]` on the struct.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model), supports(struct_named))]
pub struct ModelAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Member name case.
    #[darling(default)]
    pub rename_all: Option<RenameRule>
}
