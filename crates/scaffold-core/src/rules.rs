// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Business rule violations.
//!
//! Entities report what keeps them from being saved as a list of
//! [`RuleViolation`]s. The [`RuleViolationChain`] assembles that list from
//! reusable checks driven by the entity's [`FieldAccess`] table:
//!
//! | Step | Applies to | Message |
//! |------|------------|---------|
//! | [`require_non_empty`](RuleViolationChain::require_non_empty) | text fields | `{field} must be set.` |
//! | [`limit_length`](RuleViolationChain::limit_length) | text fields with a size bound | `{field} must have a maximum of {max} chars.` |
//! | [`concat`](RuleViolationChain::concat) | anything | caller supplied |
//!
//! The chain only records steps. Checks run each time it is evaluated, so
//! an entity recomputes its violations on every call.
//!
//! # Example
//!
//! ```rust,ignore
//! impl Validate for Product {
//!     fn rule_violations(&self) -> Vec<RuleViolation> {
//!         RuleViolationChain::new(self)
//!             .require_non_empty(["Name", "Description"])
//!             .limit_length(Self::fields().iter().map(|f| f.name))
//!             .violations()
//!     }
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::access::FieldAccess;

/// A named validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleViolation {
    /// Member the violation refers to; empty for entity-level violations.
    pub property_name: String,

    /// Human-readable message.
    pub message: String
}

impl RuleViolation {
    /// Create a violation on a property.
    pub fn new(property_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            message:       message.into()
        }
    }

    /// Create a violation not tied to a property.
    pub fn entity(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property_name.is_empty() {
            write!(f, "rule violation: {}", self.message)
        } else {
            write!(
                f,
                "rule violation on property {}: {}",
                self.property_name, self.message
            )
        }
    }
}

/// Violations that keep an entity from being persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule violations prevent saving")]
pub struct RuleViolations(pub Vec<RuleViolation>);

impl RuleViolations {
    /// Borrow the violations.
    pub fn as_slice(&self) -> &[RuleViolation] {
        &self.0
    }

    /// Take the violations.
    pub fn into_inner(self) -> Vec<RuleViolation> {
        self.0
    }

    /// Join the messages for a one-line summary.
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl IntoIterator for RuleViolations {
    type Item = RuleViolation;
    type IntoIter = std::vec::IntoIter<RuleViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Capability of reporting rule violations.
pub trait Validate {
    /// Current violations, recomputed on every call.
    fn rule_violations(&self) -> Vec<RuleViolation>;

    /// Check if the entity has no violations.
    fn is_valid(&self) -> bool {
        self.rule_violations().is_empty()
    }

    /// Fail with every violation if there are any.
    ///
    /// # Errors
    ///
    /// [`RuleViolations`] carrying the complete list.
    fn check_rule_violations(&self) -> Result<(), RuleViolations> {
        let violations = self.rule_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(RuleViolations(violations))
        }
    }
}

#[derive(Debug, Clone)]
enum Step {
    Required(Vec<String>),
    MaxLength(Vec<String>),
    Extra(Vec<RuleViolation>)
}

/// Lazily evaluated accumulator of violations for one entity.
#[derive(Debug, Clone)]
pub struct RuleViolationChain<'a, E> {
    entity: &'a E,
    steps:  Vec<Step>
}

impl<'a, E: FieldAccess> RuleViolationChain<'a, E> {
    /// Start an empty chain.
    pub fn new(entity: &'a E) -> Self {
        Self {
            entity,
            steps: Vec::new()
        }
    }

    /// Require the named text fields to be non-blank.
    ///
    /// Non-text and unknown names are ignored.
    #[must_use]
    pub fn require_non_empty<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.steps
            .push(Step::Required(names.into_iter().map(Into::into).collect()));
        self
    }

    /// Bound the trimmed length of the named text fields.
    ///
    /// Fields without a declared size are not checked.
    #[must_use]
    pub fn limit_length<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.steps
            .push(Step::MaxLength(names.into_iter().map(Into::into).collect()));
        self
    }

    /// Append arbitrary violations.
    #[must_use]
    pub fn concat<I>(mut self, violations: I) -> Self
    where
        I: IntoIterator<Item = RuleViolation>
    {
        let extra: Vec<RuleViolation> = violations.into_iter().collect();
        if !extra.is_empty() {
            self.steps.push(Step::Extra(extra));
        }
        self
    }

    /// Run every step and collect the violations in order.
    pub fn violations(&self) -> Vec<RuleViolation> {
        let mut out = Vec::new();
        for step in &self.steps {
            match step {
                Step::Required(names) => self.check_required(names, &mut out),
                Step::MaxLength(names) => self.check_lengths(names, &mut out),
                Step::Extra(extra) => out.extend(extra.iter().cloned())
            }
        }
        out
    }

    /// Check if evaluation yields no violations.
    pub fn is_empty(&self) -> bool {
        self.violations().is_empty()
    }

    // Fields are visited in declaration order, not in the order names were given.
    fn check_required(&self, names: &[String], out: &mut Vec<RuleViolation>) {
        for meta in E::fields().iter().filter(|m| m.is_text()) {
            if !names.iter().any(|n| n == meta.name) {
                continue;
            }
            let blank = self
                .entity
                .field(meta.name)
                .is_none_or(|value| value.is_blank());
            if blank {
                out.push(RuleViolation::new(
                    meta.name,
                    format!("{} must be set.", meta.name)
                ));
            }
        }
    }

    fn check_lengths(&self, names: &[String], out: &mut Vec<RuleViolation>) {
        for meta in E::fields().iter().filter(|m| m.is_text()) {
            let Some(max) = meta.max_length else {
                continue;
            };
            if !names.iter().any(|n| n == meta.name) {
                continue;
            }
            let length = self
                .entity
                .field(meta.name)
                .and_then(|value| value.as_text().map(|t| t.trim().chars().count()))
                .unwrap_or(0);
            if length > max {
                out.push(RuleViolation::new(
                    meta.name,
                    format!("{} must have a maximum of {} chars.", meta.name, max)
                ));
            }
        }
    }
}

impl<E: FieldAccess> IntoIterator for RuleViolationChain<'_, E> {
    type Item = RuleViolation;
    type IntoIter = std::vec::IntoIter<RuleViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::access::{BindError, FieldKind, FieldMeta, FieldValue};

    #[derive(Default)]
    struct Product {
        name:        String,
        description: Option<String>,
        price:       i64,
        reads:       Cell<usize>
    }

    static PRODUCT_FIELDS: [FieldMeta; 3] = [
        FieldMeta::new("Name", FieldKind::Text).with_max_length(5),
        FieldMeta::new("Description", FieldKind::Text).optional(),
        FieldMeta::new("Price", FieldKind::Other)
    ];

    impl FieldAccess for Product {
        fn fields() -> &'static [FieldMeta] {
            &PRODUCT_FIELDS
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            self.reads.set(self.reads.get() + 1);
            match name {
                "Name" => Some(FieldValue::Text(Some(&self.name))),
                "Description" => Some(FieldValue::Text(self.description.as_deref())),
                "Price" => Some(FieldValue::Other(Some(self.price.to_string()))),
                _ => None
            }
        }

        fn set_field(&mut self, name: &str, _raw: &str) -> Result<(), BindError> {
            Err(BindError::UnknownField(name.to_owned()))
        }
    }

    impl Validate for Product {
        fn rule_violations(&self) -> Vec<RuleViolation> {
            RuleViolationChain::new(self)
                .require_non_empty(["Name", "Description"])
                .limit_length(["Name", "Description", "Price"])
                .violations()
        }
    }

    #[test]
    fn blank_text_fields_are_required() {
        let p = Product {
            name: "   ".into(),
            ..Default::default()
        };
        let v = p.rule_violations();
        assert_eq!(
            v,
            vec![
                RuleViolation::new("Name", "Name must be set."),
                RuleViolation::new("Description", "Description must be set.")
            ]
        );
    }

    #[test]
    fn non_text_fields_are_not_required() {
        let p = Product {
            name: "Ball".into(),
            description: Some("Round".into()),
            ..Default::default()
        };
        let v = RuleViolationChain::new(&p).require_non_empty(["Price"]).violations();
        assert!(v.is_empty());
        assert!(p.is_valid());
    }

    #[test]
    fn length_uses_trimmed_value() {
        let p = Product {
            name: "  Ball  ".into(),
            description: Some("x".into()),
            ..Default::default()
        };
        assert!(p.is_valid());

        let p = Product {
            name: "Football".into(),
            description: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(
            p.rule_violations(),
            vec![RuleViolation::new("Name", "Name must have a maximum of 5 chars.")]
        );
    }

    #[test]
    fn unbounded_fields_are_skipped() {
        let p = Product {
            name: "Ball".into(),
            description: Some("a very long description indeed".into()),
            ..Default::default()
        };
        assert!(p.is_valid());
    }

    #[test]
    fn concat_appends_in_order() {
        let p = Product::default();
        let v = RuleViolationChain::new(&p)
            .concat([RuleViolation::entity("Out of stock")])
            .require_non_empty(["Name"])
            .concat(Vec::new())
            .violations();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].message, "Out of stock");
        assert_eq!(v[1].property_name, "Name");
    }

    #[test]
    fn duplicates_are_kept() {
        let p = Product::default();
        let v: Vec<_> = RuleViolationChain::new(&p)
            .require_non_empty(["Name"])
            .require_non_empty(["Name"])
            .into_iter()
            .collect();
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn chain_is_lazy_until_evaluated() {
        let p = Product::default();
        let chain = RuleViolationChain::new(&p).require_non_empty(["Name"]);
        assert_eq!(p.reads.get(), 0);
        let _ = chain.violations();
        assert_eq!(p.reads.get(), 1);
        let _ = chain.violations();
        assert_eq!(p.reads.get(), 2);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let p = Product {
            name: "Too long name".into(),
            ..Default::default()
        };
        assert_eq!(p.rule_violations(), p.rule_violations());
    }

    #[test]
    fn check_rule_violations_wraps_list() {
        let err = Product::default().check_rule_violations().unwrap_err();
        assert_eq!(err.to_string(), "rule violations prevent saving");
        assert_eq!(err.as_slice().len(), 2);
        assert_eq!(err.summary(), "Name must be set. Description must be set.");
        assert_eq!(err.into_inner()[0].property_name, "Name");
    }

    #[test]
    fn violation_display() {
        assert_eq!(
            RuleViolation::new("Name", "Name must be set.").to_string(),
            "rule violation on property Name: Name must be set."
        );
        assert_eq!(RuleViolation::entity("Locked").to_string(), "rule violation: Locked");
    }
}
