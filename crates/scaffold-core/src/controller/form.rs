// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Submitted form data and allow-list binding.

use crate::{
    access::{BindError, FieldAccess},
    descriptor::EntityDescriptor,
    projection::{MemberPresentation, ViewMode}
};

/// Submitted name/value pairs in submission order.
///
/// # Example
///
/// ```rust
/// use scaffold_core::FormValues;
///
/// let form: FormValues = [("Name", "Football"), ("Price", "25")].into_iter().collect();
/// assert_eq!(form.get("Price"), Some("25"));
/// assert_eq!(form.get("Description"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, String)>
}

impl FormValues {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Last value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in submission order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Submitted names in order, with repeats.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of submitted pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect()
        }
    }
}

/// Copy submitted values onto an entity.
///
/// Only members the descriptor declares and renders editable in `mode` are
/// bound; every other submitted name is ignored. A single-value member takes
/// the last value submitted under its name, a multi-value member receives
/// all of them through [`FieldAccess::set_field_values`]. Members nothing was
/// submitted for are left untouched. Conversion failures are collected so
/// each field can report its own error.
///
/// # Errors
///
/// Every [`BindError`] raised, in member order.
pub fn bind<E: FieldAccess>(
    entity: &mut E,
    descriptor: &EntityDescriptor<E>,
    mode: ViewMode,
    form: &FormValues
) -> Result<(), Vec<BindError>> {
    let mut errors = Vec::new();

    for member in descriptor.members() {
        if MemberPresentation::for_mode(member.display(), mode) != MemberPresentation::Editable {
            continue;
        }
        let name = member.name();
        let outcome = if member.is_single() {
            let Some(raw) = form.get(name) else {
                continue;
            };
            entity.set_field(name, raw)
        } else {
            let raws: Vec<&str> = form.get_all(name).collect();
            if raws.is_empty() {
                continue;
            }
            entity.set_field_values(name, &raws)
        };
        if let Err(e) = outcome {
            errors.push(e);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
