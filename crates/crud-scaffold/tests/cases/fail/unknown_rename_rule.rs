// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::ModelFields;

#[derive(ModelFields)]
#[model(rename_all = "SCREAMING")]
pub struct Product {
    pub name: String,
}

fn main() {}
