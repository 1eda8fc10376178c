// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity descriptors.
//!
//! An [`EntityDescriptor`] is the ordered member list of one entity type
//! plus projections derived from it once at construction. Descriptors are
//! immutable and shared behind an [`Arc`] by every controller and model
//! instance of the entity.
//!
//! # Lifecycle
//!
//! ```text
//! Describe::describe(lookups) ──► EntityDescriptor ──► DescriptorCache
//!                                      │                  (one per type)
//!                                      ▼
//!                        Arc<EntityDescriptor<E>> shared read-only
//! ```

use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
    fmt,
    sync::{Arc, OnceLock, RwLock}
};

use thiserror::Error;

use crate::member::{Member, MultiValueMember, SingleValueMember};

/// Invalid descriptor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Two members share the same name.
    #[error("entity `{entity}` declares member `{member}` more than once")]
    DuplicateMember {
        /// Entity name.
        entity: String,
        /// Repeated member name.
        member: String
    },

    /// The entity name is empty.
    #[error("entity name must not be empty")]
    EmptyEntityName
}

/// Ordered member list of an entity type.
///
/// # Example
///
/// ```rust
/// use scaffold_core::{EntityDescriptor, SingleValueMember};
///
/// struct Category {
///     id:   i32,
///     name: String
/// }
///
/// let descriptor = EntityDescriptor::builder("Category")
///     .single(SingleValueMember::builder("CategoryID", |c: &Category| c.id.to_string()).build())
///     .single(SingleValueMember::builder("CategoryName", |c: &Category| c.name.clone()).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(descriptor.names(), ["CategoryID", "CategoryName"]);
/// ```
pub struct EntityDescriptor<E> {
    entity_name: String,
    members:     Vec<Member<E>>,
    names:       Vec<String>,
    labels:      Vec<String>
}

impl<E> EntityDescriptor<E> {
    /// Build a descriptor from members in display order.
    ///
    /// # Errors
    ///
    /// [`DescriptorError::EmptyEntityName`] for a blank name,
    /// [`DescriptorError::DuplicateMember`] when two members share a name.
    pub fn new<I>(entity_name: impl Into<String>, members: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = Member<E>>
    {
        let entity_name = entity_name.into();
        if entity_name.trim().is_empty() {
            return Err(DescriptorError::EmptyEntityName);
        }

        let members: Vec<Member<E>> = members.into_iter().collect();
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.name()) {
                return Err(DescriptorError::DuplicateMember {
                    entity: entity_name,
                    member: member.name().to_owned()
                });
            }
        }

        let names = members.iter().map(|m| m.name().to_owned()).collect();
        let labels = members.iter().map(|m| m.label().to_owned()).collect();

        tracing::debug!(entity = %entity_name, members = members.len(), "entity descriptor built");

        Ok(Self {
            entity_name,
            members,
            names,
            labels
        })
    }

    /// Start a descriptor builder.
    pub fn builder(entity_name: impl Into<String>) -> EntityDescriptorBuilder<E> {
        EntityDescriptorBuilder {
            entity_name: entity_name.into(),
            members:     Vec::new()
        }
    }

    /// Logical entity name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// All members in display order.
    #[must_use]
    pub fn members(&self) -> &[Member<E>] {
        &self.members
    }

    /// Member names in display order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Member labels, parallel to [`names`](Self::names).
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Single-value members in display order.
    pub fn single_value_members(&self) -> impl Iterator<Item = &SingleValueMember<E>> {
        self.members.iter().filter_map(Member::as_single)
    }

    /// Multi-value members in display order.
    pub fn multi_value_members(&self) -> impl Iterator<Item = &MultiValueMember<E>> {
        self.members.iter().filter_map(Member::as_multi)
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&Member<E>> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Check if a member with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the descriptor has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<E> fmt::Debug for EntityDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity_name", &self.entity_name)
            .field("members", &self.members)
            .finish()
    }
}

/// Builder collecting members in order.
pub struct EntityDescriptorBuilder<E> {
    entity_name: String,
    members:     Vec<Member<E>>
}

impl<E> EntityDescriptorBuilder<E> {
    /// Append a single-value member.
    #[must_use]
    pub fn single(mut self, member: SingleValueMember<E>) -> Self {
        self.members.push(Member::Single(member));
        self
    }

    /// Append a multi-value member.
    #[must_use]
    pub fn multi(mut self, member: MultiValueMember<E>) -> Self {
        self.members.push(Member::Multi(member));
        self
    }

    /// Validate and build the descriptor.
    ///
    /// # Errors
    ///
    /// See [`EntityDescriptor::new`].
    pub fn build(self) -> Result<EntityDescriptor<E>, DescriptorError> {
        EntityDescriptor::new(self.entity_name, self.members)
    }
}

/// Capability of producing an entity's descriptor.
///
/// Collaborators the members need, for example a lookup repository for
/// allowed values, are passed in as `Lookups` instead of being resolved
/// from ambient state.
///
/// # Example
///
/// ```rust,ignore
/// impl Describe for Product {
///     type Lookups = CategoryRepository;
///
///     fn describe(categories: &CategoryRepository) -> Result<EntityDescriptor<Self>, DescriptorError> {
///         let names = categories.clone();
///         EntityDescriptor::builder("Product")
///             .single(SingleValueMember::builder("Name", |p: &Product| p.name.clone()).build())
///             .single(
///                 SingleValueMember::builder("CategoryID", |p: &Product| p.category_id.to_string())
///                     .visible_value(move |p: &Product| names.category_name(p.category_id))
///                     .build()
///             )
///             .build()
///     }
/// }
/// ```
pub trait Describe: Sized {
    /// Collaborators required by member selectors.
    type Lookups;

    /// Build the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] for an invalid member list.
    fn describe(lookups: &Self::Lookups) -> Result<EntityDescriptor<Self>, DescriptorError>;
}

/// Descriptor cache keyed by entity type.
///
/// The first successful [`get_or_describe`](Self::get_or_describe) for a
/// type fixes its descriptor; later calls return it without consulting
/// their lookups.
#[derive(Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>
}

impl DescriptorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<DescriptorCache> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Cached descriptor of `E`, if already built.
    pub fn get<E: 'static>(&self) -> Option<Arc<EntityDescriptor<E>>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&TypeId::of::<E>())
            .and_then(|entry| entry.downcast_ref::<Arc<EntityDescriptor<E>>>())
            .map(Arc::clone)
    }

    /// Cached descriptor of `E`, describing it on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`Describe::describe`] failures; nothing is cached then.
    pub fn get_or_describe<E>(
        &self,
        lookups: &E::Lookups
    ) -> Result<Arc<EntityDescriptor<E>>, DescriptorError>
    where
        E: Describe + 'static
    {
        if let Some(descriptor) = self.get::<E>() {
            return Ok(descriptor);
        }

        let built = Arc::new(E::describe(lookups)?);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have described the type while we were building.
        if let Some(existing) = entries
            .get(&TypeId::of::<E>())
            .and_then(|entry| entry.downcast_ref::<Arc<EntityDescriptor<E>>>())
        {
            return Ok(Arc::clone(existing));
        }
        entries.insert(TypeId::of::<E>(), Box::new(Arc::clone(&built)));
        Ok(built)
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DescriptorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::member::MemberDisplay;

    struct Category {
        id:   i32,
        name: String
    }

    fn category_descriptor() -> EntityDescriptor<Category> {
        EntityDescriptor::builder("Category")
            .single(
                SingleValueMember::builder("CategoryID", |c: &Category| c.id.to_string())
                    .display(MemberDisplay::READONLY | MemberDisplay::DETAILS)
                    .build()
            )
            .single(
                SingleValueMember::builder("CategoryName", |c: &Category| c.name.clone())
                    .label("Name")
                    .build()
            )
            .multi(MultiValueMember::builder("Aliases", |c: &Category| vec![c.name.to_lowercase()]).build())
            .build()
            .unwrap()
    }

    #[test]
    fn derived_lists_preserve_order() {
        let d = category_descriptor();
        assert_eq!(d.entity_name(), "Category");
        assert_eq!(d.names(), ["CategoryID", "CategoryName", "Aliases"]);
        assert_eq!(d.labels(), ["CategoryID", "Name", "Aliases"]);
        assert_eq!(d.len(), 3);
        assert!(!d.is_empty());
    }

    #[test]
    fn single_and_multi_partitions() {
        let d = category_descriptor();
        let singles: Vec<&str> = d.single_value_members().map(|m| m.name()).collect();
        let multis: Vec<&str> = d.multi_value_members().map(|m| m.name()).collect();
        assert_eq!(singles, ["CategoryID", "CategoryName"]);
        assert_eq!(multis, ["Aliases"]);
    }

    #[test]
    fn member_lookup() {
        let d = category_descriptor();
        assert!(d.contains("CategoryName"));
        assert!(!d.contains("Price"));
        let member = d.member("CategoryName").unwrap();
        assert_eq!(member.label(), "Name");
        let c = Category {
            id:   1,
            name: "Soccer".into()
        };
        assert_eq!(member.as_single().unwrap().value_of(&c), "Soccer");
    }

    #[test]
    fn duplicate_member_rejected() {
        let err = EntityDescriptor::builder("Category")
            .single(SingleValueMember::builder("CategoryID", |c: &Category| c.id.to_string()).build())
            .single(SingleValueMember::builder("CategoryID", |c: &Category| c.name.clone()).build())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DescriptorError::DuplicateMember {
                entity: "Category".into(),
                member: "CategoryID".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "entity `Category` declares member `CategoryID` more than once"
        );
    }

    #[test]
    fn empty_entity_name_rejected() {
        let err = EntityDescriptor::<Category>::new("  ", Vec::new()).unwrap_err();
        assert_eq!(err, DescriptorError::EmptyEntityName);
    }

    static DESCRIBE_CALLS: AtomicUsize = AtomicUsize::new(0);

    impl Describe for Category {
        type Lookups = String;

        fn describe(label: &String) -> Result<EntityDescriptor<Self>, DescriptorError> {
            DESCRIBE_CALLS.fetch_add(1, Ordering::SeqCst);
            EntityDescriptor::builder("Category")
                .single(
                    SingleValueMember::builder("CategoryName", |c: &Category| c.name.clone())
                        .label(label.clone())
                        .build()
                )
                .build()
        }
    }

    #[test]
    fn cache_describes_once_per_type() {
        let cache = DescriptorCache::new();
        assert!(cache.is_empty());
        assert!(cache.get::<Category>().is_none());

        let before = DESCRIBE_CALLS.load(Ordering::SeqCst);
        let first = cache.get_or_describe::<Category>(&"Name".to_owned()).unwrap();
        let second = cache.get_or_describe::<Category>(&"Ignored".to_owned()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.labels(), ["Name"]);
        assert_eq!(DESCRIBE_CALLS.load(Ordering::SeqCst) - before, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn global_cache_is_shared() {
        assert!(std::ptr::eq(DescriptorCache::global(), DescriptorCache::global()));
    }
}
