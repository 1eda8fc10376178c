// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing and type classification.
//!
//! # Supported Attributes
//!
//! | Attribute | Example |
//! |-----------|---------|
//! | `name` | `#[member(name = "ProductID")]` |
//! | `skip` | `#[member(skip)]` |
//! | `varchar` | `#[column(varchar = 50)]` |
//! | `db_type` | `#[column(db_type = "NVarChar(50) NOT NULL")]` |

mod column;

use syn::{Attribute, Field, GenericArgument, Ident, LitStr, Meta, PathArguments, Type};

pub use self::column::ColumnConfig;
use super::RenameRule;

/// How a field converts between its Rust type and submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// `String`.
    Text,

    /// `Option<String>`.
    OptionalText,

    /// Any `T: FromStr + Display`.
    Parsed,

    /// `Option<T>` with `T: FromStr + Display`.
    OptionalParsed
}

impl FieldShape {
    /// Classify a field type.
    pub fn of(ty: &Type) -> Self {
        match option_inner(ty) {
            Some(inner) if is_string(inner) => Self::OptionalText,
            Some(_) => Self::OptionalParsed,
            None if is_string(ty) => Self::Text,
            None => Self::Parsed
        }
    }

    /// Check for a text shape.
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::OptionalText)
    }

    /// Check for an `Option` shape.
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::OptionalText | Self::OptionalParsed)
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        _ => None
    }
}

fn is_string(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == "String")
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    })
}

/// One struct field with its parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Rust field identifier.
    pub ident: Ident,

    /// Conversion shape of the field type.
    pub shape: FieldShape,

    /// Member name the field is addressed by.
    pub member_name: String,

    /// Excluded from the table.
    pub skip: bool,

    /// Schema column settings.
    pub column: ColumnConfig
}

impl FieldDef {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// Unnamed fields and malformed `member` or `column` attributes.
    pub fn from_field(field: &Field, rename_all: RenameRule) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("ModelFields fields must be named").with_span(field)
        })?;

        let mut name = None;
        let mut skip = false;
        let mut column = ColumnConfig::default();

        for attr in &field.attrs {
            if attr.path().is_ident("member") {
                parse_member(attr, &mut name, &mut skip)?;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
            }
        }

        let member_name = name.unwrap_or_else(|| rename_all.apply(&ident.to_string()));

        Ok(Self {
            ident,
            shape: FieldShape::of(&field.ty),
            member_name,
            skip,
            column
        })
    }

    /// Size bound of a text field; non-text fields have none.
    pub fn max_length(&self) -> Option<usize> {
        if self.shape.is_text() {
            self.column.max_length()
        } else {
            None
        }
    }
}

fn parse_member(attr: &Attribute, name: &mut Option<String>, skip: &mut bool) -> syn::Result<()> {
    let Meta::List(list) = &attr.meta else {
        return Err(syn::Error::new_spanned(attr, "expected #[member(...)]"));
    };
    list.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let value: LitStr = meta.value()?.parse()?;
            if value.value().trim().is_empty() {
                return Err(meta.error("member name must not be empty"));
            }
            *name = Some(value.value());
        } else if meta.path.is_ident("skip") {
            *skip = true;
        } else {
            return Err(meta.error("expected `name` or `skip`"));
        }
        Ok(())
    })
}
