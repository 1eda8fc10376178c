// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Store entities and their in-memory repositories.
//!
//! ```text
//! Category 1 ──< Product
//!   CategoryID     ProductID
//!   CategoryName   Name, Description, Price
//!                  CategoryID (optional)
//! ```

mod category;
mod product;

pub use category::Category;
pub use product::Product;
use crud_scaffold::MemoryRepository;

/// Category repository keyed by `CategoryID`.
pub type Categories = MemoryRepository<Category, u32>;

/// Product repository keyed by `ProductID`.
pub type Products = MemoryRepository<Product, u32>;

/// Repositories backing the store.
#[derive(Clone)]
pub struct Catalog {
    /// Categories keyed by `CategoryID`.
    pub categories: Categories,

    /// Products keyed by `ProductID`.
    pub products: Products
}

impl Catalog {
    /// Empty catalogue with generated keys.
    pub fn new() -> Self {
        Self {
            categories: MemoryRepository::new(|c: &Category| c.category_id)
                .with_key_assigner(category::assign_id),
            products:   MemoryRepository::new(|p: &Product| p.product_id)
                .with_key_assigner(product::assign_id)
        }
    }

    /// Catalogue the store opens with.
    pub fn seeded() -> Self {
        let catalog = Self::new();
        catalog.categories.seed([
            Category::new(1, "Soccer"),
            Category::new(2, "Watersports"),
            Category::new(3, "Running")
        ]);
        catalog.products.seed([
            Product::new(1, "Football", "FIFA-approved size and weight", 25.0, 1),
            Product::new(2, "Surf board", "A board for one person", 179.0, 2),
            Product::new(3, "Running shoes", "Cushioned road shoes", 95.0, 3),
            Product::new(4, "Corner flags", "Give your pitch a professional touch", 34.95, 1),
            Product::new(5, "Lifejacket", "Protective and fashionable", 48.95, 2),
            Product::new(6, "Stadium", "Flat-packed 35,000-seat stadium", 79500.0, 1)
        ]);
        catalog
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(next: u64) -> u32 {
    u32::try_from(next).unwrap_or(u32::MAX)
}
