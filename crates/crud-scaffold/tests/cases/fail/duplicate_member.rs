// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::ModelFields;

#[derive(ModelFields)]
pub struct Product {
    #[member(name = "Name")]
    pub title: String,

    pub name: String,
}

fn main() {}
