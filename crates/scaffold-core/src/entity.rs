// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity capability required by projections and the controller.

use crate::access::FieldAccess;

/// A business record the scaffolding can present and bind.
///
/// `Default` provides the empty instance shown on create forms.
///
/// # Example
///
/// ```rust,ignore
/// impl ModelEntity for Product {
///     fn key(&self) -> String {
///         if self.product_id == 0 { String::new() } else { self.product_id.to_string() }
///     }
/// }
/// ```
pub trait ModelEntity: FieldAccess + Default {
    /// The entity's own key as text; empty while unsaved.
    fn key(&self) -> String;
}
