// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::ModelFields;

#[derive(ModelFields)]
pub struct Product(u32, String);

fn main() {}
