// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member views bound to one entity.

use super::{ChoiceCache, MemberSnapshot, SnapshotValue, ViewMode};
use crate::member::{MemberDisplay, MultiValueMember, SingleValueMember};

/// How a member is rendered in a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MemberPresentation {
    /// Not rendered.
    Hidden,

    /// Rendered as text.
    ReadOnly,

    /// Rendered as an input.
    Editable
}

impl MemberPresentation {
    /// Decide presentation from display flags.
    ///
    /// | View | Requires | `READONLY` |
    /// |------|----------|------------|
    /// | Index | `INDEX` | ignored |
    /// | Details, Delete | `DETAILS` | ignored |
    /// | Edit | `EDIT` | read-only |
    /// | Create | `CREATE` | read-only |
    pub const fn for_mode(display: MemberDisplay, mode: ViewMode) -> Self {
        let required = match mode {
            ViewMode::Index => MemberDisplay::INDEX,
            ViewMode::Details | ViewMode::Delete => MemberDisplay::DETAILS,
            ViewMode::Edit => MemberDisplay::EDIT,
            ViewMode::Create => MemberDisplay::CREATE
        };
        if !display.contains(required) {
            return Self::Hidden;
        }
        if mode.is_form() && !display.contains(MemberDisplay::READONLY) {
            Self::Editable
        } else {
            Self::ReadOnly
        }
    }
}

/// One entry of a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoiceItem {
    /// User-facing text.
    pub text: String,

    /// Submitted value.
    pub value: String,

    /// Whether the entry matches the current value.
    pub selected: bool
}

/// Link to a referenced entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelatedLink {
    /// Link text.
    pub text: String,

    /// Logical name of the referenced entity.
    pub entity_name: String,

    /// Key of the referenced entity.
    pub key: String
}

fn zip_choices(
    values: &[String],
    visible: &[String],
    is_selected: impl Fn(&str) -> bool
) -> Vec<ChoiceItem> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| ChoiceItem {
            text:     visible.get(i).unwrap_or(value).clone(),
            value:    value.clone(),
            selected: is_selected(value)
        })
        .collect()
}

/// A single-value member bound to one entity.
pub struct SingleMemberValue<'a, E> {
    member:    &'a SingleValueMember<E>,
    entity:    &'a E,
    cache:     &'a ChoiceCache,
    view_mode: ViewMode
}

impl<'a, E> SingleMemberValue<'a, E> {
    pub(crate) const fn new(
        member: &'a SingleValueMember<E>,
        entity: &'a E,
        cache: &'a ChoiceCache,
        view_mode: ViewMode
    ) -> Self {
        Self {
            member,
            entity,
            cache,
            view_mode
        }
    }

    /// Underlying descriptor.
    #[must_use]
    pub const fn member(&self) -> &'a SingleValueMember<E> {
        self.member
    }

    /// Member name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.member.name()
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.member.label()
    }

    /// Canonical value for this entity.
    pub fn value(&self) -> String {
        self.member.value_of(self.entity)
    }

    /// User-facing value for this entity.
    pub fn visible_value(&self) -> String {
        self.member.visible_value_of(self.entity)
    }

    /// Key of the referenced entity.
    pub fn related_entity_key(&self) -> String {
        self.member.related_entity_key_of(self.entity)
    }

    /// Allowed values, computed once per model instance.
    pub fn allowed_values(&self) -> &'a [String] {
        self.cache
            .values
            .get_or_init(|| self.member.allowed_values())
    }

    /// Allowed visible values, computed once per model instance.
    pub fn allowed_visible_values(&self) -> &'a [String] {
        self.cache
            .visible_values
            .get_or_init(|| self.member.allowed_visible_values())
    }

    /// Presentation in the instance's view.
    pub fn presentation(&self) -> MemberPresentation {
        MemberPresentation::for_mode(self.member.display(), self.view_mode)
    }

    /// Choice list with the current value selected.
    pub fn choices(&self) -> Vec<ChoiceItem> {
        let current = self.value();
        zip_choices(self.allowed_values(), self.allowed_visible_values(), |v| {
            v == current
        })
    }

    /// Link to the referenced entity, if the member is a reference.
    pub fn related_link(&self) -> Option<RelatedLink> {
        self.member
            .related_entity_name()
            .map(|entity_name| RelatedLink {
                text:        self.visible_value(),
                entity_name: entity_name.to_owned(),
                key:         self.related_entity_key()
            })
    }
}

/// A multi-value member bound to one entity.
pub struct MultiMemberValue<'a, E> {
    member:    &'a MultiValueMember<E>,
    entity:    &'a E,
    cache:     &'a ChoiceCache,
    view_mode: ViewMode
}

impl<'a, E> MultiMemberValue<'a, E> {
    pub(crate) const fn new(
        member: &'a MultiValueMember<E>,
        entity: &'a E,
        cache: &'a ChoiceCache,
        view_mode: ViewMode
    ) -> Self {
        Self {
            member,
            entity,
            cache,
            view_mode
        }
    }

    /// Underlying descriptor.
    #[must_use]
    pub const fn member(&self) -> &'a MultiValueMember<E> {
        self.member
    }

    /// Member name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.member.name()
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.member.label()
    }

    /// Canonical values for this entity.
    pub fn values(&self) -> Vec<String> {
        self.member.values_of(self.entity)
    }

    /// User-facing values for this entity.
    pub fn visible_values(&self) -> Vec<String> {
        self.member.visible_values_of(self.entity)
    }

    /// Keys of the referenced entities.
    pub fn related_entity_keys(&self) -> Vec<String> {
        self.member.related_entity_keys_of(self.entity)
    }

    /// Allowed values, computed once per model instance.
    pub fn allowed_values(&self) -> &'a [String] {
        self.cache
            .values
            .get_or_init(|| self.member.allowed_values())
    }

    /// Allowed visible values, computed once per model instance.
    pub fn allowed_visible_values(&self) -> &'a [String] {
        self.cache
            .visible_values
            .get_or_init(|| self.member.allowed_visible_values())
    }

    /// Presentation in the instance's view.
    pub fn presentation(&self) -> MemberPresentation {
        MemberPresentation::for_mode(self.member.display(), self.view_mode)
    }

    /// Visible values joined for plain-text display.
    pub fn display_text(&self) -> String {
        self.visible_values().join(" | ")
    }

    /// Choice list with every current value selected.
    pub fn choices(&self) -> Vec<ChoiceItem> {
        let current = self.values();
        zip_choices(self.allowed_values(), self.allowed_visible_values(), |v| {
            current.iter().any(|c| c == v)
        })
    }

    /// One link per referenced entity; empty if the member is not a reference.
    pub fn related_links(&self) -> Vec<RelatedLink> {
        let Some(entity_name) = self.member.related_entity_name() else {
            return Vec::new();
        };
        self.visible_values()
            .into_iter()
            .zip(self.related_entity_keys())
            .map(|(text, key)| RelatedLink {
                text,
                entity_name: entity_name.to_owned(),
                key
            })
            .collect()
    }
}

/// Either kind of bound member.
pub enum MemberValue<'a, E> {
    /// Single-value member.
    Single(SingleMemberValue<'a, E>),

    /// Multi-value member.
    Multi(MultiMemberValue<'a, E>)
}

impl<'a, E> MemberValue<'a, E> {
    /// Member name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Single(v) => v.name(),
            Self::Multi(v) => v.name()
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        match self {
            Self::Single(v) => v.label(),
            Self::Multi(v) => v.label()
        }
    }

    /// Presentation in the instance's view.
    pub fn presentation(&self) -> MemberPresentation {
        match self {
            Self::Single(v) => v.presentation(),
            Self::Multi(v) => v.presentation()
        }
    }

    /// Owned rendering of the member.
    ///
    /// Choices are only computed for editable members and links only for
    /// read-only references.
    pub fn snapshot(&self) -> MemberSnapshot {
        let presentation = self.presentation();
        let editable = presentation == MemberPresentation::Editable;

        match self {
            Self::Single(v) => MemberSnapshot {
                name: v.name().to_owned(),
                label: v.label().to_owned(),
                presentation,
                related_entity_name: v.member().related_entity_name().map(str::to_owned),
                value: SnapshotValue::Single {
                    value:         v.value(),
                    visible_value: v.visible_value()
                },
                choices: if editable { v.choices() } else { Vec::new() },
                links: if editable {
                    Vec::new()
                } else {
                    v.related_link().into_iter().collect()
                }
            },
            Self::Multi(v) => MemberSnapshot {
                name: v.name().to_owned(),
                label: v.label().to_owned(),
                presentation,
                related_entity_name: v.member().related_entity_name().map(str::to_owned),
                value: SnapshotValue::Multi {
                    values:         v.values(),
                    visible_values: v.visible_values()
                },
                choices: if editable { v.choices() } else { Vec::new() },
                links: if editable {
                    Vec::new()
                } else {
                    v.related_links()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order {
        category: u32,
        lines:    Vec<u32>
    }

    fn category() -> SingleValueMember<Order> {
        SingleValueMember::builder("CategoryID", |o: &Order| o.category.to_string())
            .visible_value(|o: &Order| format!("Cat{}", o.category))
            .related_entity_key(|o: &Order| o.category.to_string())
            .related_entity("Categories")
            .allowed_values(|| vec!["1".into(), "2".into(), "3".into()])
            .allowed_visible_values(|| vec!["Cat1".into(), "Cat2".into()])
            .build()
    }

    fn lines() -> MultiValueMember<Order> {
        MultiValueMember::builder("Lines", |o: &Order| {
            o.lines.iter().map(ToString::to_string).collect()
        })
        .visible_values(|o: &Order| o.lines.iter().map(|l| format!("Line {}", l)).collect())
        .related_entity("OrderLines")
        .allowed_values(|| vec!["7".into(), "8".into(), "9".into()])
        .build()
    }

    fn order() -> Order {
        Order {
            category: 2,
            lines:    vec![7, 9]
        }
    }

    #[test]
    fn presentation_table() {
        use MemberPresentation::*;
        let d = MemberDisplay::DEFAULT;
        assert_eq!(MemberPresentation::for_mode(d, ViewMode::Index), ReadOnly);
        assert_eq!(MemberPresentation::for_mode(d, ViewMode::Details), ReadOnly);
        assert_eq!(MemberPresentation::for_mode(d, ViewMode::Delete), ReadOnly);
        assert_eq!(MemberPresentation::for_mode(d, ViewMode::Edit), Editable);
        assert_eq!(MemberPresentation::for_mode(d, ViewMode::Create), Editable);

        let ro = MemberDisplay::DETAILS | MemberDisplay::READONLY | MemberDisplay::EDIT;
        assert_eq!(MemberPresentation::for_mode(ro, ViewMode::Edit), ReadOnly);
        assert_eq!(MemberPresentation::for_mode(ro, ViewMode::Create), Hidden);
        assert_eq!(MemberPresentation::for_mode(ro, ViewMode::Index), Hidden);
    }

    #[test]
    fn single_choices_zip_and_select() {
        let member = category();
        let cache = ChoiceCache::default();
        let o = order();
        let v = SingleMemberValue::new(&member, &o, &cache, ViewMode::Edit);

        let choices = v.choices();
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].text, "Cat1");
        assert_eq!(choices[2].text, "3");
        assert!(choices[1].selected);
        assert!(!choices[0].selected);
    }

    #[test]
    fn single_related_link() {
        let member = category();
        let cache = ChoiceCache::default();
        let o = order();
        let v = SingleMemberValue::new(&member, &o, &cache, ViewMode::Details);
        assert_eq!(
            v.related_link(),
            Some(RelatedLink {
                text:        "Cat2".into(),
                entity_name: "Categories".into(),
                key:         "2".into()
            })
        );

        let plain = SingleValueMember::builder("Qty", |o: &Order| o.lines.len().to_string()).build();
        let v = SingleMemberValue::new(&plain, &o, &cache, ViewMode::Details);
        assert!(v.related_link().is_none());
    }

    #[test]
    fn multi_values_and_links() {
        let member = lines();
        let cache = ChoiceCache::default();
        let o = order();
        let v = MultiMemberValue::new(&member, &o, &cache, ViewMode::Details);

        assert_eq!(v.values(), vec!["7", "9"]);
        assert_eq!(v.display_text(), "Line 7 | Line 9");
        assert_eq!(v.related_entity_keys(), vec!["Line 7", "Line 9"]);

        let links = v.related_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].entity_name, "OrderLines");
        assert_eq!(links[1].text, "Line 9");
    }

    #[test]
    fn multi_choices_select_every_value() {
        let member = lines();
        let cache = ChoiceCache::default();
        let o = order();
        let v = MultiMemberValue::new(&member, &o, &cache, ViewMode::Edit);
        let selected: Vec<bool> = v.choices().iter().map(|c| c.selected).collect();
        assert_eq!(selected, [true, false, true]);
        assert_eq!(v.allowed_visible_values(), ["7", "8", "9"]);
    }

    #[test]
    fn snapshot_switches_between_choices_and_links() {
        let member = category();
        let cache = ChoiceCache::default();
        let o = order();

        let edit = MemberValue::Single(SingleMemberValue::new(&member, &o, &cache, ViewMode::Edit)).snapshot();
        assert_eq!(edit.choices.len(), 3);
        assert!(edit.links.is_empty());

        let details =
            MemberValue::Single(SingleMemberValue::new(&member, &o, &cache, ViewMode::Details)).snapshot();
        assert!(details.choices.is_empty());
        assert_eq!(details.links.len(), 1);
        assert_eq!(
            details.value,
            SnapshotValue::Single {
                value:         "2".into(),
                visible_value: "Cat2".into()
            }
        );
    }
}
