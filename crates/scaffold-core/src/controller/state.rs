// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-request error channel and transient state.

use std::{any::Any, collections::HashMap, fmt};

use crate::rules::RuleViolation;

/// One error shown on a re-rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelError {
    /// Member name; empty for the form-wide summary.
    pub key: String,

    /// Message.
    pub message: String
}

/// Ordered errors attached to a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModelState {
    errors: Vec<ModelError>
}

impl ModelState {
    /// Create an empty error list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ModelError {
            key:     key.into(),
            message: message.into()
        });
    }

    /// Record violations keyed by their property names.
    pub fn add_rule_violations<I>(&mut self, violations: I)
    where
        I: IntoIterator<Item = RuleViolation>
    {
        for violation in violations {
            self.add_error(violation.property_name, violation.message);
        }
    }

    /// Check if no error was recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors in insertion order.
    pub fn errors(&self) -> &[ModelError] {
        &self.errors
    }

    /// Errors recorded for one key.
    pub fn errors_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ModelError> {
        self.errors.iter().filter(move |e| e.key == key)
    }

    /// Check if an error with this key and message exists.
    pub fn contains(&self, key: &str, message: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.key == key && e.message == message)
    }
}

/// Values carried from one request to the next.
///
/// The controller stashes an index page here before redirecting to its
/// canonical URL; the follow-up request takes it out again. Entries are
/// consumed on read.
#[derive(Default)]
pub struct TempData {
    slots: HashMap<String, Box<dyn Any + Send>>
}

impl TempData {
    /// Create empty temp data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a key, replacing any previous one.
    pub fn put<T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.slots.insert(key.into(), Box::new(value));
    }

    /// Remove and return the value under a key.
    ///
    /// A value of another type is removed as well and yields `None`.
    pub fn take<T: Any>(&mut self, key: &str) -> Option<T> {
        self.slots
            .remove(key)
            .and_then(|value| value.downcast::<T>().ok())
            .map(|value| *value)
    }

    /// Check if a key is occupied.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for TempData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempData")
            .field("keys", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}
