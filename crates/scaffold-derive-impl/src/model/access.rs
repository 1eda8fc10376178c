// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `FieldAccess` implementation generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::scaffold_core::FieldAccess for Product {
//!     fn fields() -> &'static [::scaffold_core::FieldMeta] {
//!         const FIELDS: &[::scaffold_core::FieldMeta] = &[
//!             ::scaffold_core::FieldMeta::new("Name", ::scaffold_core::FieldKind::Text)
//!                 .with_max_length(100),
//!             // ...
//!         ];
//!         FIELDS
//!     }
//!
//!     fn field(&self, name: &str) -> Option<::scaffold_core::FieldValue<'_>> {
//!         match name {
//!             "Name" => Some(::scaffold_core::FieldValue::Text(Some(self.name.as_str()))),
//!             // ...
//!             _ => None
//!         }
//!     }
//!
//!     fn set_field(&mut self, name: &str, raw: &str) -> Result<(), ::scaffold_core::BindError> {
//!         match name {
//!             "Name" => self.name = raw.to_owned(),
//!             "Price" => self.price = ::scaffold_core::parse_value(name, raw)?,
//!             // ...
//!             _ => return Err(::scaffold_core::BindError::UnknownField(name.to_owned()))
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, FieldShape, ModelDef};

/// Generate the `FieldAccess` impl.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();

    let metas = model.fields.iter().map(meta);
    let getters = model.fields.iter().map(getter);
    let setters = model.fields.iter().map(setter);

    quote! {
        impl #impl_generics ::scaffold_core::FieldAccess for #ident #ty_generics #where_clause {
            fn fields() -> &'static [::scaffold_core::FieldMeta] {
                const FIELDS: &[::scaffold_core::FieldMeta] = &[#(#metas),*];
                FIELDS
            }

            fn field(
                &self,
                name: &str
            ) -> ::core::option::Option<::scaffold_core::FieldValue<'_>> {
                match name {
                    #(#getters,)*
                    _ => ::core::option::Option::None
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                raw: &str
            ) -> ::core::result::Result<(), ::scaffold_core::BindError> {
                match name {
                    #(#setters,)*
                    _ => {
                        return ::core::result::Result::Err(
                            ::scaffold_core::BindError::UnknownField(
                                ::std::string::ToString::to_string(name)
                            )
                        );
                    }
                }
                ::core::result::Result::Ok(())
            }
        }
    }
}

fn meta(field: &FieldDef) -> TokenStream {
    let name = &field.member_name;
    let kind = if field.shape.is_text() {
        quote!(::scaffold_core::FieldKind::Text)
    } else {
        quote!(::scaffold_core::FieldKind::Other)
    };
    let optional = field.shape.is_optional().then(|| quote!(.optional()));
    let bound = field
        .max_length()
        .map(|max| quote!(.with_max_length(#max)));

    quote! {
        ::scaffold_core::FieldMeta::new(#name, #kind) #optional #bound
    }
}

fn getter(field: &FieldDef) -> TokenStream {
    let name = &field.member_name;
    let ident = &field.ident;

    let value = match field.shape {
        FieldShape::Text => quote! {
            ::scaffold_core::FieldValue::Text(::core::option::Option::Some(self.#ident.as_str()))
        },
        FieldShape::OptionalText => quote! {
            ::scaffold_core::FieldValue::Text(self.#ident.as_deref())
        },
        FieldShape::Parsed => quote! {
            ::scaffold_core::FieldValue::Other(::core::option::Option::Some(
                ::std::string::ToString::to_string(&self.#ident)
            ))
        },
        FieldShape::OptionalParsed => quote! {
            ::scaffold_core::FieldValue::Other(
                self.#ident.as_ref().map(::std::string::ToString::to_string)
            )
        }
    };

    quote! {
        #name => ::core::option::Option::Some(#value)
    }
}

fn setter(field: &FieldDef) -> TokenStream {
    let name = &field.member_name;
    let ident = &field.ident;

    let value = match field.shape {
        FieldShape::Text => quote!(::std::string::ToString::to_string(raw)),
        FieldShape::OptionalText => quote!(::scaffold_core::optional_text(raw)),
        FieldShape::Parsed => quote!(::scaffold_core::parse_value(name, raw)?),
        FieldShape::OptionalParsed => quote!(::scaffold_core::parse_optional(name, raw)?)
    };

    quote! {
        #name => self.#ident = #value
    }
}
