// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared sports-store fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use crud_scaffold::{
    ControllerConfig, CrudController, Describe, DescriptorError, EntityDescriptor, MemberDisplay,
    MemoryRepository, ModelEntity, ModelFields, Repository, RuleViolation, RuleViolationChain,
    SingleValueMember, Validate
};

pub type Categories = MemoryRepository<Category, u32>;
pub type Products = MemoryRepository<Product, u32>;

#[derive(Debug, Clone, Default, PartialEq, ModelFields)]
pub struct Category {
    #[member(name = "CategoryID")]
    pub category_id: u32,

    #[column(db_type = "NVarChar(50) NOT NULL")]
    pub category_name: String
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

#[derive(Debug, Clone, Default, PartialEq, ModelFields)]
pub struct Product {
    #[member(name = "ProductID")]
    pub product_id: u32,

    #[column(db_type = "NVarChar(100) NOT NULL")]
    pub name: String,

    #[column(db_type = "NVarChar(500) NOT NULL")]
    pub description: String,

    pub price: f64,

    #[member(name = "CategoryID")]
    pub category_id: Option<u32>
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

impl Describe for Product {
    type Lookups = Categories;

    fn describe(categories: &Categories) -> Result<EntityDescriptor<Self>, DescriptorError> {
        let names = categories.clone();
        let ids = categories.clone();
        let labels = categories.clone();

        EntityDescriptor::builder("Product")
            .single(
                SingleValueMember::builder("ProductID", |p: &Product| p.product_id.to_string())
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
                    ids.get_all()
                        .unwrap_or_default()
                        .iter()
                        .map(|c| c.category_id.to_string())
                        .collect()
                })
                .allowed_visible_values(move || {
                    labels
                        .get_all()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|c| c.category_name)
                        .collect()
                })
                .build()
            )
            .build()
    }
}

pub fn product(id: u32, name: &str, price: f64, category: u32) -> Product {
    Product {
        product_id:  id,
        name:        name.to_owned(),
        description: format!("{name} for everyone"),
        price,
        category_id: Some(category)
    }
}

pub fn categories() -> Categories {
    let repo = MemoryRepository::new(|c: &Category| c.category_id);
    repo.seed([
        Category {
            category_id:   1,
            category_name: "Soccer".into()
        },
        Category {
            category_id:   2,
            category_name: "Watersports".into()
        },
        Category {
            category_id:   3,
            category_name: "Running".into()
        }
    ]);
    repo
}

fn assign_product_id(product: &mut Product, next: u64) -> bool {
    if product.product_id != 0 {
        return false;
    }
    product.product_id = u32::try_from(next).unwrap_or(u32::MAX);
    true
}

pub fn products() -> Products {
    let repo = MemoryRepository::new(|p: &Product| p.product_id).with_key_assigner(assign_product_id);
    repo.seed([
        product(1, "Football", 25.0, 1),
        product(2, "Surf board", 179.0, 2),
        product(3, "Running shoes", 95.0, 3)
    ]);
    repo
}

pub fn product_controller(page_size: usize) -> CrudController<Product, Products> {
    let descriptor = Arc::new(Product::describe(&categories()).unwrap());
    CrudController::new(products(), descriptor).with_config(
        ControllerConfig::default()
            .with_page_size(page_size)
            .with_verbose_errors(false)
    )
}
