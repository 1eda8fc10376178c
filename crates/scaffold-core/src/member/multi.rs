// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Multi-value member descriptor.

use std::{fmt, sync::Arc};

use super::{Choices, ChoicesSelector, MemberDisplay, MemberHeader, ValuesSelector};

/// Describes a field that projects to an ordered list of strings.
///
/// Typical use is a one-to-many relation rendered as several linked values.
pub struct MultiValueMember<E> {
    pub(crate) header:   MemberHeader,
    values:              ValuesSelector<E>,
    visible_values:      ValuesSelector<E>,
    related_entity_keys: ValuesSelector<E>,
    pub(crate) choices:  Choices
}

impl<E> MultiValueMember<E> {
    /// Start describing a member named `name` with its values selector.
    pub fn builder<F>(name: impl Into<String>, values: F) -> MultiValueMemberBuilder<E>
    where
        F: Fn(&E) -> Vec<String> + Send + Sync + 'static
    {
        MultiValueMemberBuilder {
            name:                   name.into(),
            label:                  None,
            display:                MemberDisplay::DEFAULT,
            related_entity_name:    None,
            values:                 Arc::new(values),
            visible_values:         None,
            related_entity_keys:    None,
            allowed_values:         None,
            allowed_visible_values: None
        }
    }

    /// Unique member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.header.label
    }

    /// Views this member appears in.
    #[must_use]
    pub fn display(&self) -> MemberDisplay {
        self.header.display
    }

    /// Logical name of the referenced entity, if any.
    #[must_use]
    pub fn related_entity_name(&self) -> Option<&str> {
        self.header.related_entity_name.as_deref()
    }

    /// Canonical values of the member.
    pub fn values_of(&self, entity: &E) -> Vec<String> {
        (self.values)(entity)
    }

    /// User-facing values of the member.
    pub fn visible_values_of(&self, entity: &E) -> Vec<String> {
        (self.visible_values)(entity)
    }

    /// Keys of the referenced entities.
    pub fn related_entity_keys_of(&self, entity: &E) -> Vec<String> {
        (self.related_entity_keys)(entity)
    }

    /// Values the member may take, in display order.
    pub fn allowed_values(&self) -> Vec<String> {
        (self.choices.values)()
    }

    /// User-facing texts for [`allowed_values`](Self::allowed_values).
    pub fn allowed_visible_values(&self) -> Vec<String> {
        (self.choices.visible_values)()
    }

    /// Reopen the member for modification, keeping resolved selectors.
    pub fn into_builder(self) -> MultiValueMemberBuilder<E> {
        MultiValueMemberBuilder {
            name:                   self.header.name,
            label:                  Some(self.header.label),
            display:                self.header.display,
            related_entity_name:    self.header.related_entity_name,
            values:                 self.values,
            visible_values:         Some(self.visible_values),
            related_entity_keys:    Some(self.related_entity_keys),
            allowed_values:         Some(self.choices.values),
            allowed_visible_values: Some(self.choices.visible_values)
        }
    }
}

impl<E> Clone for MultiValueMember<E> {
    fn clone(&self) -> Self {
        Self {
            header:              self.header.clone(),
            values:              Arc::clone(&self.values),
            visible_values:      Arc::clone(&self.visible_values),
            related_entity_keys: Arc::clone(&self.related_entity_keys),
            choices:             self.choices.clone()
        }
    }
}

impl<E> fmt::Debug for MultiValueMember<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiValueMember")
            .field("name", &self.header.name)
            .field("label", &self.header.label)
            .field("display", &self.header.display)
            .field("related_entity_name", &self.header.related_entity_name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`MultiValueMember`].
pub struct MultiValueMemberBuilder<E> {
    name:                   String,
    label:                  Option<String>,
    display:                MemberDisplay,
    related_entity_name:    Option<String>,
    values:                 ValuesSelector<E>,
    visible_values:         Option<ValuesSelector<E>>,
    related_entity_keys:    Option<ValuesSelector<E>>,
    allowed_values:         Option<ChoicesSelector>,
    allowed_visible_values: Option<ChoicesSelector>
}

impl<E> MultiValueMemberBuilder<E> {
    /// Set the display label. Defaults to the name.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the views the member appears in.
    #[must_use]
    pub fn display(mut self, display: MemberDisplay) -> Self {
        self.display = display;
        self
    }

    /// Mark the member as a reference to another entity.
    #[must_use]
    pub fn related_entity(mut self, entity_name: impl Into<String>) -> Self {
        self.related_entity_name = Some(entity_name.into());
        self
    }

    /// Replace the values selector.
    #[must_use]
    pub fn values<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> Vec<String> + Send + Sync + 'static
    {
        self.values = Arc::new(f);
        self
    }

    /// Set the user-facing values selector. Defaults to the values selector.
    #[must_use]
    pub fn visible_values<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> Vec<String> + Send + Sync + 'static
    {
        self.visible_values = Some(Arc::new(f));
        self
    }

    /// Set the related keys selector. Defaults to the visible values selector.
    #[must_use]
    pub fn related_entity_keys<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> Vec<String> + Send + Sync + 'static
    {
        self.related_entity_keys = Some(Arc::new(f));
        self
    }

    /// Set the allowed values. Defaults to none.
    #[must_use]
    pub fn allowed_values<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static
    {
        self.allowed_values = Some(Arc::new(f));
        self
    }

    /// Set the allowed visible values. Defaults to the allowed values.
    #[must_use]
    pub fn allowed_visible_values<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static
    {
        self.allowed_visible_values = Some(Arc::new(f));
        self
    }

    /// Resolve defaults and freeze the member.
    pub fn build(self) -> MultiValueMember<E> {
        let visible_values = self
            .visible_values
            .unwrap_or_else(|| Arc::clone(&self.values));
        let related_entity_keys = self
            .related_entity_keys
            .unwrap_or_else(|| Arc::clone(&visible_values));

        MultiValueMember {
            header: MemberHeader {
                label:               self.label.unwrap_or_else(|| self.name.clone()),
                name:                self.name,
                display:             self.display,
                related_entity_name: self.related_entity_name
            },
            values: self.values,
            visible_values,
            related_entity_keys,
            choices: Choices::resolve(self.allowed_values, self.allowed_visible_values)
        }
    }
}
