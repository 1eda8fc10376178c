// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-request projections of entities.
//!
//! A [`ModelInstance`] pairs one entity with its descriptor and a
//! [`ViewMode`]. Member values are computed when read, never at
//! construction, because selectors may be expensive. Allowed values do not
//! depend on the entity and are memoized per instance on first access.
//!
//! # Architecture
//!
//! ```text
//! projection/
//! ├── value.rs     - borrowed member views, presentation, choices, links
//! └── snapshot.rs  - owned, serializable renderings for the view layer
//! ```

mod snapshot;
mod value;

use std::{
    fmt,
    sync::{Arc, OnceLock}
};

pub use snapshot::{IndexSnapshot, InstanceSnapshot, MemberSnapshot, PageInfo, SnapshotValue};
pub use value::{
    ChoiceItem, MemberPresentation, MemberValue, MultiMemberValue, RelatedLink, SingleMemberValue
};

use crate::{descriptor::EntityDescriptor, entity::ModelEntity, member::Member, paging::PagedList};

/// View an entity is projected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ViewMode {
    /// Row of the paged list.
    Index,

    /// Read-only details page.
    Details,

    /// Edit form of an existing entity.
    Edit,

    /// Create form of a new entity.
    Create,

    /// Delete confirmation.
    Delete
}

impl ViewMode {
    /// View name as used in render instructions.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Details => "Details",
            Self::Edit => "Edit",
            Self::Create => "Create",
            Self::Delete => "Delete"
        }
    }

    /// Check if the view is a form that binds input.
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::Edit | Self::Create)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Memoized allowed values of one member.
#[derive(Debug, Default)]
pub(crate) struct ChoiceCache {
    values:         OnceLock<Vec<String>>,
    visible_values: OnceLock<Vec<String>>
}

/// One entity projected through its descriptor.
pub struct ModelInstance<E> {
    descriptor: Arc<EntityDescriptor<E>>,
    entity:     E,
    key:        String,
    view_mode:  ViewMode,
    choices:    Vec<ChoiceCache>
}

impl<E: ModelEntity> ModelInstance<E> {
    /// Project an entity for a view.
    ///
    /// Only the key is read eagerly; it is trimmed of whitespace.
    pub fn new(descriptor: Arc<EntityDescriptor<E>>, entity: E, view_mode: ViewMode) -> Self {
        let key = entity.key().trim().to_owned();
        let choices = descriptor
            .members()
            .iter()
            .map(|_| ChoiceCache::default())
            .collect();
        Self {
            descriptor,
            entity,
            key,
            view_mode,
            choices
        }
    }
}

impl<E> ModelInstance<E> {
    /// Logical entity name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        self.descriptor.entity_name()
    }

    /// Member labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.descriptor.labels()
    }

    /// Member names in display order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        self.descriptor.names()
    }

    /// Trimmed entity key; empty for an unsaved entity.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// View this instance was projected for.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Underlying entity.
    #[must_use]
    pub const fn entity(&self) -> &E {
        &self.entity
    }

    /// Shared descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &Arc<EntityDescriptor<E>> {
        &self.descriptor
    }

    /// Take the entity back.
    pub fn into_entity(self) -> E {
        self.entity
    }

    /// All members in display order.
    pub fn members(&self) -> impl Iterator<Item = MemberValue<'_, E>> {
        self.descriptor
            .members()
            .iter()
            .zip(&self.choices)
            .map(|(member, cache)| self.wrap(member, cache))
    }

    /// Single-value members in display order.
    pub fn single_value_members(&self) -> impl Iterator<Item = SingleMemberValue<'_, E>> {
        self.members().filter_map(|m| match m {
            MemberValue::Single(v) => Some(v),
            MemberValue::Multi(_) => None
        })
    }

    /// Multi-value members in display order.
    pub fn multi_value_members(&self) -> impl Iterator<Item = MultiMemberValue<'_, E>> {
        self.members().filter_map(|m| match m {
            MemberValue::Multi(v) => Some(v),
            MemberValue::Single(_) => None
        })
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<MemberValue<'_, E>> {
        self.members().find(|m| m.name() == name)
    }

    /// Members visible in this instance's view.
    pub fn visible_members(&self) -> impl Iterator<Item = MemberValue<'_, E>> {
        self.members()
            .filter(|m| m.presentation() != MemberPresentation::Hidden)
    }

    fn wrap<'a>(&'a self, member: &'a Member<E>, cache: &'a ChoiceCache) -> MemberValue<'a, E> {
        match member {
            Member::Single(m) => MemberValue::Single(SingleMemberValue::new(
                m,
                &self.entity,
                cache,
                self.view_mode
            )),
            Member::Multi(m) => MemberValue::Multi(MultiMemberValue::new(
                m,
                &self.entity,
                cache,
                self.view_mode
            ))
        }
    }

    /// Owned rendering of the visible members.
    pub fn snapshot(&self) -> InstanceSnapshot {
        InstanceSnapshot {
            entity_name: self.entity_name().to_owned(),
            key:         self.key.clone(),
            view_mode:   self.view_mode,
            members:     self.visible_members().map(|m| m.snapshot()).collect()
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ModelInstance<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelInstance")
            .field("entity_name", &self.entity_name())
            .field("key", &self.key)
            .field("view_mode", &self.view_mode)
            .field("entity", &self.entity)
            .finish()
    }
}

/// One page of projected entities for the index view.
pub struct IndexModel<E> {
    descriptor: Arc<EntityDescriptor<E>>,
    instances:  PagedList<ModelInstance<E>>
}

impl<E> IndexModel<E> {
    /// Wrap a page of index-mode instances.
    pub fn new(descriptor: Arc<EntityDescriptor<E>>, instances: PagedList<ModelInstance<E>>) -> Self {
        Self {
            descriptor,
            instances
        }
    }

    /// Logical entity name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        self.descriptor.entity_name()
    }

    /// Member labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.descriptor.labels()
    }

    /// Projected entities of the page.
    #[must_use]
    pub const fn instances(&self) -> &PagedList<ModelInstance<E>> {
        &self.instances
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.instances.page_index()
    }

    /// Take the paged instances.
    pub fn into_instances(self) -> PagedList<ModelInstance<E>> {
        self.instances
    }

    /// Owned rendering of the page.
    ///
    /// Column labels are restricted to members shown on the index.
    pub fn snapshot(&self) -> IndexSnapshot {
        let labels = self
            .descriptor
            .members()
            .iter()
            .filter(|m| {
                MemberPresentation::for_mode(m.display(), ViewMode::Index)
                    != MemberPresentation::Hidden
            })
            .map(|m| m.label().to_owned())
            .collect();

        IndexSnapshot {
            entity_name: self.entity_name().to_owned(),
            labels,
            rows: self.instances.iter().map(ModelInstance::snapshot).collect(),
            page: PageInfo::of(&self.instances)
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for IndexModel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexModel")
            .field("entity_name", &self.entity_name())
            .field("instances", &self.instances)
            .finish()
    }
}
