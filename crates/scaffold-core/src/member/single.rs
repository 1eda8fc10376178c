// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Single-value member descriptor.

use std::{fmt, sync::Arc};

use super::{Choices, ChoicesSelector, MemberDisplay, MemberHeader, ValueSelector};

/// Describes a field that projects to one string.
///
/// Built through [`SingleValueMember::builder`]; immutable afterwards.
///
/// # Example
///
/// ```rust
/// use scaffold_core::{MemberDisplay, SingleValueMember};
///
/// struct Product {
///     price: f64
/// }
///
/// let price = SingleValueMember::builder("Price", |p: &Product| format!("{:.2}", p.price))
///     .visible_value(|p: &Product| format!("${:.2}", p.price))
///     .display(MemberDisplay::DEFAULT)
///     .build();
///
/// let football = Product { price: 25.0 };
/// assert_eq!(price.value_of(&football), "25.00");
/// assert_eq!(price.visible_value_of(&football), "$25.00");
/// assert_eq!(price.related_entity_key_of(&football), "$25.00");
/// ```
pub struct SingleValueMember<E> {
    pub(crate) header:  MemberHeader,
    value:              ValueSelector<E>,
    visible_value:      ValueSelector<E>,
    related_entity_key: ValueSelector<E>,
    pub(crate) choices: Choices
}

impl<E> SingleValueMember<E> {
    /// Start describing a member named `name` with its value selector.
    pub fn builder<F>(name: impl Into<String>, value: F) -> SingleValueMemberBuilder<E>
    where
        F: Fn(&E) -> String + Send + Sync + 'static
    {
        SingleValueMemberBuilder {
            name:                   name.into(),
            label:                  None,
            display:                MemberDisplay::DEFAULT,
            related_entity_name:    None,
            value:                  Arc::new(value),
            visible_value:          None,
            related_entity_key:     None,
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

    /// Canonical value of the member.
    pub fn value_of(&self, entity: &E) -> String {
        (self.value)(entity)
    }

    /// User-facing value of the member.
    pub fn visible_value_of(&self, entity: &E) -> String {
        (self.visible_value)(entity)
    }

    /// Key of the referenced entity.
    pub fn related_entity_key_of(&self, entity: &E) -> String {
        (self.related_entity_key)(entity)
    }

    /// Values the member may take, in display order.
    pub fn allowed_values(&self) -> Vec<String> {
        (self.choices.values)()
    }

    /// User-facing texts for [`allowed_values`](Self::allowed_values).
    pub fn allowed_visible_values(&self) -> Vec<String> {
        (self.choices.visible_values)()
    }

    /// Reopen the member for modification.
    ///
    /// Every selector is carried over in its resolved form.
    pub fn into_builder(self) -> SingleValueMemberBuilder<E> {
        SingleValueMemberBuilder {
            name:                   self.header.name,
            label:                  Some(self.header.label),
            display:                self.header.display,
            related_entity_name:    self.header.related_entity_name,
            value:                  self.value,
            visible_value:          Some(self.visible_value),
            related_entity_key:     Some(self.related_entity_key),
            allowed_values:         Some(self.choices.values),
            allowed_visible_values: Some(self.choices.visible_values)
        }
    }
}

impl<E> Clone for SingleValueMember<E> {
    fn clone(&self) -> Self {
        Self {
            header:             self.header.clone(),
            value:              Arc::clone(&self.value),
            visible_value:      Arc::clone(&self.visible_value),
            related_entity_key: Arc::clone(&self.related_entity_key),
            choices:            self.choices.clone()
        }
    }
}

impl<E> fmt::Debug for SingleValueMember<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleValueMember")
            .field("name", &self.header.name)
            .field("label", &self.header.label)
            .field("display", &self.header.display)
            .field("related_entity_name", &self.header.related_entity_name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SingleValueMember`].
pub struct SingleValueMemberBuilder<E> {
    name:                   String,
    label:                  Option<String>,
    display:                MemberDisplay,
    related_entity_name:    Option<String>,
    value:                  ValueSelector<E>,
    visible_value:          Option<ValueSelector<E>>,
    related_entity_key:     Option<ValueSelector<E>>,
    allowed_values:         Option<ChoicesSelector>,
    allowed_visible_values: Option<ChoicesSelector>
}

impl<E> SingleValueMemberBuilder<E> {
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

    /// Replace the value selector.
    #[must_use]
    pub fn value<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> String + Send + Sync + 'static
    {
        self.value = Arc::new(f);
        self
    }

    /// Set the user-facing value selector. Defaults to the value selector.
    #[must_use]
    pub fn visible_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> String + Send + Sync + 'static
    {
        self.visible_value = Some(Arc::new(f));
        self
    }

    /// Set the related key selector. Defaults to the visible value selector.
    #[must_use]
    pub fn related_entity_key<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> String + Send + Sync + 'static
    {
        self.related_entity_key = Some(Arc::new(f));
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
    pub fn build(self) -> SingleValueMember<E> {
        let visible_value = self.visible_value.unwrap_or_else(|| Arc::clone(&self.value));
        let related_entity_key = self
            .related_entity_key
            .unwrap_or_else(|| Arc::clone(&visible_value));

        SingleValueMember {
            header: MemberHeader {
                label:               self.label.unwrap_or_else(|| self.name.clone()),
                name:                self.name,
                display:             self.display,
                related_entity_name: self.related_entity_name
            },
            value: self.value,
            visible_value,
            related_entity_key,
            choices: Choices::resolve(self.allowed_values, self.allowed_visible_values)
        }
    }
}
