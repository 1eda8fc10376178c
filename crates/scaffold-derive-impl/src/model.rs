// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `ModelFields` derive.
//!
//! # Architecture
//!
//! ```text
//! model/
//! ├── parse.rs            ModelDef: container + field attributes
//! │   ├── attrs.rs        #[model(...)] via darling
//! │   ├── field.rs        FieldDef: #[member(...)], type classification
//! │   │   └── column.rs   #[column(...)] size bound
//! │   └── tests.rs
//! └── access.rs           FieldAccess impl generation
//! ```

mod access;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Entry point of the derive.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => access::generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}
