// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::{FieldAccess, FieldValue, ModelFields};

#[derive(Debug, Default, ModelFields)]
pub struct Product {
    #[column(varchar = 500)]
    pub description: Option<String>,

    #[member(name = "CategoryID")]
    pub category_id: Option<u32>,
}

fn main() {
    let mut product = Product::default();
    assert!(Product::field_meta("Description").unwrap().optional);

    product.set_field("Description", "").unwrap();
    assert_eq!(product.description, None);
    product.set_field("CategoryID", "   ").unwrap();
    assert_eq!(product.category_id, None);

    product.set_field("CategoryID", "3").unwrap();
    assert_eq!(product.field("CategoryID"), Some(FieldValue::Other(Some("3".to_owned()))));
    assert!(product.set_field("CategoryID", "three").is_err());
}
