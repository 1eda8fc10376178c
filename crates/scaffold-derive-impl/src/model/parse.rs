// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsed model definition.

mod attrs;
mod field;
#[cfg(test)]
mod tests;

use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

pub use self::{
    attrs::RenameRule,
    field::{FieldDef, FieldShape}
};
use self::attrs::ModelAttrs;

/// Struct definition with its accessible fields.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the impl.
    pub generics: Generics,

    /// Case applied to derived member names.
    pub rename_all: RenameRule,

    /// Fields not marked `#[member(skip)]`, in declaration order.
    pub fields: Vec<FieldDef>
}

impl ModelDef {
    /// Parse from the derive input.
    ///
    /// # Errors
    ///
    /// Non-struct or non-named input, unknown container values, malformed
    /// field attributes and duplicate member names. All field errors are
    /// reported together.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ModelAttrs::from_derive_input(input)?;
        let rename_all = attrs.rename_all.unwrap_or_default();

        let named = match &input.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(named),
                ..
            }) => named,
            _ => {
                return Err(darling::Error::custom(
                    "ModelFields requires a struct with named fields"
                )
                .with_span(&input.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let mut fields: Vec<FieldDef> = Vec::new();

        for field in &named.named {
            let Some(def) = errors.handle(FieldDef::from_field(field, rename_all)) else {
                continue;
            };
            if def.skip {
                continue;
            }
            if fields.iter().any(|f| f.member_name == def.member_name) {
                errors.push(
                    darling::Error::custom(format!(
                        "member name `{}` is used by more than one field",
                        def.member_name
                    ))
                    .with_span(&def.ident)
                );
                continue;
            }
            fields.push(def);
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            rename_all,
            fields
        })
    }
}
