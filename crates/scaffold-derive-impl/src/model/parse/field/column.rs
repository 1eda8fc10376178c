// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema column size annotation.
//!
//! | Attribute | Example | Bound |
//! |-----------|---------|-------|
//! | `varchar` | `#[column(varchar = 255)]` | `255` |
//! | `db_type` | `#[column(db_type = "NVarChar(50) NOT NULL")]` | `50` |
//!
//! `varchar` wins when both are present. A `db_type` without a `Char(n)`
//! part leaves the field unbounded.

use syn::{Attribute, LitInt, LitStr, Meta};

/// Parsed `#[column(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Explicit `VARCHAR(n)` length.
    pub varchar: Option<usize>,

    /// Raw database type declaration.
    pub db_type: Option<String>
}

impl ColumnConfig {
    /// Parse from a `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Unknown keys and values of the wrong literal type.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new_spanned(attr, "expected #[column(...)]"));
        };
        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("varchar") {
                let value: LitInt = meta.value()?.parse()?;
                config.varchar = Some(value.base10_parse()?);
            } else if meta.path.is_ident("db_type") {
                let value: LitStr = meta.value()?.parse()?;
                config.db_type = Some(value.value());
            } else {
                return Err(meta.error("expected `varchar` or `db_type`"));
            }
            Ok(())
        })?;

        Ok(config)
    }

    /// Maximum text length declared by the column.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.varchar
            .or_else(|| self.db_type.as_deref().and_then(char_bound))
    }
}

/// Integer inside the first `char(<n>)`, case-insensitive.
fn char_bound(db_type: &str) -> Option<usize> {
    let lower = db_type.to_ascii_lowercase();
    let start = lower.find("char(")? + "char(".len();
    let rest = &lower[start..];
    let end = rest.find(')')?;
    rest[..end].trim().parse().ok()
}
