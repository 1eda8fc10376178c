// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_scaffold::{
    Describe, DescriptorError, EntityDescriptor, MemberDisplay, ModelEntity, ModelFields,
    Repository, RuleViolation, RuleViolationChain, SingleValueMember, Validate
};

use super::{Categories, Category};

/// Product in the catalogue.
#[derive(Debug, Clone, Default, PartialEq, ModelFields)]
pub struct Product {
    /// Generated key, zero until saved.
    #[member(name = "ProductID")]
    pub product_id: u32,

    /// Product name.
    #[column(db_type = "NVarChar(100) NOT NULL")]
    pub name: String,

    /// Marketing text.
    #[column(db_type = "NVarChar(500) NOT NULL")]
    pub description: String,

    /// Unit price in dollars.
    pub price: f64,

    /// Owning category, if any.
    #[member(name = "CategoryID")]
    pub category_id: Option<u32>
}

impl Product {
    /// Product with a known key.
    pub fn new(product_id: u32, name: &str, description: &str, price: f64, category: u32) -> Self {
        Self {
            product_id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            category_id: Some(category)
        }
    }
}

pub(super) fn assign_id(product: &mut Product, next: u64) -> bool {
    if product.product_id != 0 {
        return false;
    }
    product.product_id = super::next_id(next);
    true
}

impl ModelEntity for Product {
    fn key(&self) -> String {
        if self.product_id == 0 { String::new() } else { self.product_id.to_string() }
    }
}

impl Validate for Product {
    fn rule_violations(&self) -> Vec<RuleViolation> {
        RuleViolationChain::new(self)
            .require_non_empty(["Name", "Description"])
            .limit_length(["ProductID", "Name", "Description", "Price", "CategoryID"])
            .violations()
    }
}

fn category_name(categories: &Categories, id: Option<u32>) -> String {
    id.and_then(|id| categories.get(&id).ok().flatten())
        .map(|c| c.category_name)
        .unwrap_or_default()
}

fn all_categories(categories: &Categories) -> Vec<Category> {
    categories.get_all().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "category lookup failed");
        Vec::new()
    })
}

impl Describe for Product {
    type Lookups = Categories;

    fn describe(categories: &Categories) -> Result<EntityDescriptor<Self>, DescriptorError> {
        let names = categories.clone();
        let ids = categories.clone();
        let labels = categories.clone();

        EntityDescriptor::builder("Product")
            .single(
                SingleValueMember::builder("ProductID", |p: &Product| p.product_id.to_string())
                    .label("ID")
                    .display(MemberDisplay::DETAILS)
                    .build()
            )
            .single(SingleValueMember::builder("Name", |p: &Product| p.name.clone()).build())
            .single(
                SingleValueMember::builder("Description", |p: &Product| p.description.clone())
                    .build()
            )
            .single(
                SingleValueMember::builder("Price", |p: &Product| format!("{:.2}", p.price))
                    .visible_value(|p: &Product| format!("${:.2}", p.price))
                    .build()
            )
            .single(
                SingleValueMember::builder("CategoryID", |p: &Product| {
                    p.category_id.map(|id| id.to_string()).unwrap_or_default()
                })
                .label("Category")
                .related_entity("Categories")
                .visible_value(move |p: &Product| category_name(&names, p.category_id))
                .allowed_values(move || {
                    all_categories(&ids)
                        .iter()
                        .map(|c| c.category_id.to_string())
                        .collect()
                })
                .allowed_visible_values(move || {
                    all_categories(&labels)
                        .into_iter()
                        .map(|c| c.category_name)
                        .collect()
                })
                .build()
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crud_scaffold::{FieldAccess, ModelInstance, ViewMode};

    use super::*;
    use crate::domain::Catalog;

    fn descriptor() -> Arc<EntityDescriptor<Product>> {
        Arc::new(Product::describe(&Catalog::seeded().categories).unwrap())
    }

    #[test]
    fn members_follow_declaration() {
        let descriptor = descriptor();
        assert_eq!(
            descriptor.names(),
            ["ProductID", "Name", "Description", "Price", "CategoryID"]
        );
        assert_eq!(descriptor.labels()[4], "Category");
    }

    #[test]
    fn category_is_shown_by_name() {
        let instance = ModelInstance::new(
            descriptor(),
            Product::new(1, "Football", "Round", 25.0, 2),
            ViewMode::Details
        );
        let snapshot = instance.snapshot();
        let category = snapshot
            .members
            .iter()
            .find(|m| m.name == "CategoryID")
            .unwrap();
        assert_eq!(category.related_entity_name.as_deref(), Some("Categories"));
        let price = snapshot.members.iter().find(|m| m.name == "Price").unwrap();
        assert_eq!(price.label, "Price");
        assert_eq!(instance.key(), "1");
    }

    #[test]
    fn description_length_comes_from_column() {
        let meta = Product::field_meta("Description").unwrap();
        assert_eq!(meta.max_length, Some(500));
        assert!(Product::field_meta("Price").unwrap().max_length.is_none());
    }

    #[test]
    fn missing_text_is_reported_per_field() {
        let violations = Product::default().rule_violations();
        let fields: Vec<_> = violations.iter().map(|v| v.property_name.as_str()).collect();
        assert_eq!(fields, ["Name", "Description"]);
    }
}
