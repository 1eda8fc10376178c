// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{fmt::Display, str::FromStr};

use crud_scaffold::{FieldAccess, ModelFields};

#[derive(Debug, Default, ModelFields)]
pub struct Tagged<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    pub tag: T,
}

fn main() {
    let mut tagged = Tagged::<i64>::default();
    tagged.set_field("Tag", "-4").unwrap();
    assert_eq!(tagged.tag, -4);
}
