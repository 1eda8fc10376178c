// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::{FieldAccess, ModelFields};

#[derive(Debug, Default, ModelFields)]
#[model(rename_all = "snake_case")]
pub struct Order {
    pub order_number: u64,

    pub ship_to: String,

    #[member(skip)]
    pub cached_total: Vec<u8>,
}

fn main() {
    let names: Vec<&str> = Order::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["order_number", "ship_to"]);
    assert!(Order::field_meta("cached_total").is_none());
}
