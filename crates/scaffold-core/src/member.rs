// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member descriptors.
//!
//! A member describes one field of an entity for generic presentation:
//! its name and label, the views it appears in, and the selectors that
//! project an entity onto display strings.
//!
//! # Architecture
//!
//! ```text
//! member/
//! ├── display.rs  - MemberDisplay flag set
//! ├── single.rs   - SingleValueMember + builder (selectors return String)
//! └── multi.rs    - MultiValueMember + builder (selectors return Vec<String>)
//! ```
//!
//! # Selector Cascade
//!
//! Builders resolve unset selectors once, in [`build`](SingleValueMemberBuilder::build):
//!
//! ```text
//! value ──► visible_value ──► related_entity_key
//! allowed_values ──► allowed_visible_values
//! ```
//!
//! Each arrow means "defaults to". The result does not depend on the order
//! the builder methods were called in. Converting a built member back into
//! a builder keeps its resolved selectors, so overriding `visible_value`
//! afterwards leaves the captured `related_entity_key` untouched.

mod display;
mod multi;
mod single;

use std::sync::Arc;

pub use display::MemberDisplay;
pub use multi::{MultiValueMember, MultiValueMemberBuilder};
pub use single::{SingleValueMember, SingleValueMemberBuilder};

/// Projects an entity onto one string.
pub type ValueSelector<E> = Arc<dyn Fn(&E) -> String + Send + Sync>;

/// Projects an entity onto an ordered list of strings.
pub type ValuesSelector<E> = Arc<dyn Fn(&E) -> Vec<String> + Send + Sync>;

/// Produces the ordered choices a member may take.
///
/// Choices do not depend on the entity; they typically query a lookup
/// repository injected when the descriptor is built.
pub type ChoicesSelector = Arc<dyn Fn() -> Vec<String> + Send + Sync>;

/// Fields shared by both member kinds.
#[derive(Clone)]
pub(crate) struct MemberHeader {
    pub(crate) name:                String,
    pub(crate) label:               String,
    pub(crate) display:             MemberDisplay,
    pub(crate) related_entity_name: Option<String>
}

/// Resolved allowed-value selectors.
#[derive(Clone)]
pub(crate) struct Choices {
    pub(crate) values:         ChoicesSelector,
    pub(crate) visible_values: ChoicesSelector
}

impl Choices {
    /// Apply the `allowed_values -> allowed_visible_values` default.
    pub(crate) fn resolve(values: Option<ChoicesSelector>, visible: Option<ChoicesSelector>) -> Self {
        let values = values.unwrap_or_else(|| Arc::new(Vec::<String>::new));
        let visible_values = visible.unwrap_or_else(|| Arc::clone(&values));
        Self {
            values,
            visible_values
        }
    }
}

/// Either kind of member, in descriptor order.
pub enum Member<E> {
    /// Member projecting to one string.
    Single(SingleValueMember<E>),

    /// Member projecting to a list of strings.
    Multi(MultiValueMember<E>)
}

impl<E> Member<E> {
    fn header(&self) -> &MemberHeader {
        match self {
            Self::Single(m) => &m.header,
            Self::Multi(m) => &m.header
        }
    }

    /// Unique member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.header().name
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.header().label
    }

    /// Views this member appears in.
    #[must_use]
    pub fn display(&self) -> MemberDisplay {
        self.header().display
    }

    /// Logical name of the referenced entity, if any.
    #[must_use]
    pub fn related_entity_name(&self) -> Option<&str> {
        self.header().related_entity_name.as_deref()
    }

    /// Check if this is a single-value member.
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Borrow as a single-value member.
    pub const fn as_single(&self) -> Option<&SingleValueMember<E>> {
        match self {
            Self::Single(m) => Some(m),
            Self::Multi(_) => None
        }
    }

    /// Borrow as a multi-value member.
    pub const fn as_multi(&self) -> Option<&MultiValueMember<E>> {
        match self {
            Self::Multi(m) => Some(m),
            Self::Single(_) => None
        }
    }
}

impl<E> Clone for Member<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Single(m) => Self::Single(m.clone()),
            Self::Multi(m) => Self::Multi(m.clone())
        }
    }
}

impl<E> std::fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(m) => m.fmt(f),
            Self::Multi(m) => m.fmt(f)
        }
    }
}

impl<E> From<SingleValueMember<E>> for Member<E> {
    fn from(member: SingleValueMember<E>) -> Self {
        Self::Single(member)
    }
}

impl<E> From<MultiValueMember<E>> for Member<E> {
    fn from(member: MultiValueMember<E>) -> Self {
        Self::Multi(member)
    }
}
