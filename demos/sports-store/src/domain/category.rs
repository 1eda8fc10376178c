// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::{
    Describe, DescriptorError, EntityDescriptor, MemberDisplay, ModelEntity, ModelFields,
    RuleViolation, RuleViolationChain, SingleValueMember, Validate
};

/// Product category.
#[derive(Debug, Clone, Default, PartialEq, ModelFields)]
pub struct Category {
    /// Generated key, zero until saved.
    #[member(name = "CategoryID")]
    pub category_id: u32,

    /// Display name.
    #[column(db_type = "NVarChar(50) NOT NULL")]
    pub category_name: String
}

impl Category {
    /// Category with a known key.
    pub fn new(category_id: u32, category_name: &str) -> Self {
        Self {
            category_id,
            category_name: category_name.to_owned()
        }
    }
}

pub(super) fn assign_id(category: &mut Category, next: u64) -> bool {
    if category.category_id != 0 {
        return false;
    }
    category.category_id = super::next_id(next);
    true
}

impl ModelEntity for Category {
    fn key(&self) -> String {
        if self.category_id == 0 { String::new() } else { self.category_id.to_string() }
    }
}

impl Validate for Category {
    fn rule_violations(&self) -> Vec<RuleViolation> {
        RuleViolationChain::new(self)
            .require_non_empty(["CategoryName"])
            .limit_length(["CategoryName"])
            .violations()
    }
}

impl Describe for Category {
    type Lookups = ();

    fn describe(_: &()) -> Result<EntityDescriptor<Self>, DescriptorError> {
        EntityDescriptor::builder("Category")
            .single(
                SingleValueMember::builder("CategoryID", |c: &Category| c.category_id.to_string())
                    .label("ID")
                    .display(MemberDisplay::READONLY | MemberDisplay::DETAILS)
                    .build()
            )
            .single(
                SingleValueMember::builder("CategoryName", |c: &Category| c.category_name.clone())
                    .label("Name")
                    .build()
            )
            .build()
    }
}
