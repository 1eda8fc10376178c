// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for model parsing.
//!
//! Struct definitions are built with `syn::parse_quote!` and the parsed
//! [`ModelDef`] is checked field by field.

use syn::DeriveInput;

use super::{FieldShape, ModelDef, RenameRule};

fn parse(input: DeriveInput) -> ModelDef {
    ModelDef::from_derive_input(&input).unwrap()
}

#[test]
fn member_names_default_to_pascal_case() {
    let model = parse(syn::parse_quote! {
        pub struct Product {
            pub product_id: i32,
            pub name: String,
        }
    });
    assert_eq!(model.rename_all, RenameRule::Pascal);
    let names: Vec<_> = model.fields.iter().map(|f| f.member_name.as_str()).collect();
    assert_eq!(names, ["ProductId", "Name"]);
}

#[test]
fn explicit_name_overrides_case() {
    let model = parse(syn::parse_quote! {
        pub struct Product {
            #[member(name = "ProductID")]
            pub product_id: i32,
        }
    });
    assert_eq!(model.fields[0].member_name, "ProductID");
}

#[test]
fn rename_all_is_applied() {
    let model = parse(syn::parse_quote! {
        #[model(rename_all = "camelCase")]
        pub struct Category {
            pub category_name: String,
        }
    });
    assert_eq!(model.fields[0].member_name, "categoryName");
}

#[test]
fn unknown_rename_rule_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[model(rename_all = "shouting")]
        pub struct Category {
            pub name: String,
        }
    };
    assert!(ModelDef::from_derive_input(&input).is_err());
}

#[test]
fn skipped_fields_are_dropped() {
    let model = parse(syn::parse_quote! {
        pub struct Product {
            pub name: String,
            #[member(skip)]
            pub row_version: u64,
        }
    });
    assert_eq!(model.fields.len(), 1);
    assert_eq!(model.fields[0].ident, "name");
}

#[test]
fn shapes_are_classified() {
    let model = parse(syn::parse_quote! {
        pub struct Product {
            pub name: String,
            pub description: Option<String>,
            pub price: f64,
            pub category_id: Option<i32>,
            pub notes: std::string::String,
        }
    });
    let shapes: Vec<_> = model.fields.iter().map(|f| f.shape).collect();
    assert_eq!(
        shapes,
        [
            FieldShape::Text,
            FieldShape::OptionalText,
            FieldShape::Parsed,
            FieldShape::OptionalParsed,
            FieldShape::Text
        ]
    );
    assert!(FieldShape::OptionalText.is_text());
    assert!(FieldShape::OptionalParsed.is_optional());
    assert!(!FieldShape::Parsed.is_optional());
}

#[test]
fn size_bound_applies_to_text_only() {
    let model = parse(syn::parse_quote! {
        pub struct Product {
            #[column(db_type = "NVarChar(100) NOT NULL")]
            pub name: String,
            #[column(varchar = 8)]
            pub price: f64,
        }
    });
    assert_eq!(model.fields[0].max_length(), Some(100));
    assert_eq!(model.fields[1].max_length(), None);
}

#[test]
fn duplicate_member_names_are_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Product {
            #[member(name = "Name")]
            pub title: String,
            pub name: String,
        }
    };
    let err = ModelDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("`Name`"));
}

#[test]
fn malformed_member_attribute_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Product {
            #[member(rename = "Title")]
            pub name: String,
        }
    };
    assert!(ModelDef::from_derive_input(&input).is_err());
}

#[test]
fn tuple_structs_are_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Product(String);
    };
    assert!(ModelDef::from_derive_input(&input).is_err());
}

#[test]
fn enums_are_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        pub enum Product { Ball }
    };
    assert!(ModelDef::from_derive_input(&input).is_err());
}

#[test]
fn generics_are_kept() {
    let model = parse(syn::parse_quote! {
        pub struct Tagged<T> {
            pub tag: T,
        }
    });
    assert_eq!(model.generics.params.len(), 1);
}
