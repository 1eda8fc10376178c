// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::{FieldAccess, FieldKind, FieldValue, ModelFields};

#[derive(Debug, Default, ModelFields)]
pub struct Category {
    #[member(name = "CategoryID")]
    pub category_id: u32,

    #[column(db_type = "NVarChar(50) NOT NULL")]
    pub category_name: String,
}

fn main() {
    let fields = Category::fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "CategoryID");
    assert_eq!(fields[0].kind, FieldKind::Other);
    assert_eq!(fields[1].max_length, Some(50));

    let mut category = Category::default();
    category.set_field("CategoryID", " 7 ").unwrap();
    category.set_field("CategoryName", "Chess").unwrap();
    assert_eq!(category.category_id, 7);
    assert_eq!(category.field("CategoryName"), Some(FieldValue::Text(Some("Chess"))));
    assert!(category.set_field("Missing", "x").unwrap_err().is_programming_error());
}
