// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statically typed named field access.
//!
//! Generic binding and validation address entity fields by member name.
//! Instead of runtime reflection every entity carries a static table of its
//! fields plus a getter and setter dispatching on the name. The table is
//! normally produced by `#[derive(ModelFields)]`.
//!
//! # Field Kinds
//!
//! | Rust type | Kind | Empty input binds to |
//! |-----------|------|----------------------|
//! | `String` | [`FieldKind::Text`] | `""` |
//! | `Option<String>` | [`FieldKind::Text`] | `None` |
//! | `T: FromStr` | [`FieldKind::Other`] | parse error |
//! | `Option<T: FromStr>` | [`FieldKind::Other`] | `None` |

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Broad type class of a field.
///
/// Only text fields take part in required and length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `String` or `Option<String>`.
    Text,

    /// Any other `FromStr + Display` type.
    Other
}

/// Static description of one accessible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Member name used by descriptors and form binding.
    pub name: &'static str,

    /// Type class of the field.
    pub kind: FieldKind,

    /// Whether the Rust type is an `Option`.
    pub optional: bool,

    /// Maximum length from the schema column size, if declared.
    pub max_length: Option<usize>
}

impl FieldMeta {
    /// Create metadata for a required field without a size bound.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
            max_length: None
        }
    }

    /// Mark the field as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a maximum length bound.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if the field holds text.
    pub const fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text)
    }
}

/// Current value of a field read through [`FieldAccess::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Borrowed text; `None` for an unset `Option<String>`.
    Text(Option<&'a str>),

    /// Any other value rendered through `Display`.
    Other(Option<String>)
}

impl FieldValue<'_> {
    /// Text content, or `None` for non-text fields.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => *text,
            Self::Other(_) => None
        }
    }

    /// Check whether the value is absent or blank after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_none_or(|t| t.trim().is_empty()),
            Self::Other(value) => value.as_deref().is_none_or(|v| v.trim().is_empty())
        }
    }
}

/// Failure while writing a submitted value into a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The name is not part of the entity's field table.
    ///
    /// Indicates a descriptor naming a member the entity does not expose.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The submitted text could not be converted to the field type.
    #[error("the value '{value}' is not valid for {field}: {message}")]
    Invalid {
        /// Member name.
        field:   String,
        /// Submitted raw text.
        value:   String,
        /// Conversion error message.
        message: String
    },

    /// Several values were submitted for a field holding one value.
    #[error("{0} accepts a single value")]
    MultipleValues(String)
}

impl BindError {
    /// Member name the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField(field)
            | Self::Invalid { field, .. }
            | Self::MultipleValues(field) => field
        }
    }

    /// Check if this error reveals a misconfigured descriptor.
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::UnknownField(_))
    }
}

/// Named field access for an entity type.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default, ModelFields)]
/// struct Category {
///     #[member(name = "CategoryID")]
///     category_id: i32,
///     #[column(db_type = "NVarChar(50) NOT NULL")]
///     category_name: String
/// }
///
/// let mut c = Category::default();
/// c.set_field("CategoryName", "Soccer")?;
/// assert_eq!(c.field("CategoryName"), Some(FieldValue::Text(Some("Soccer"))));
/// ```
pub trait FieldAccess {
    /// Static field table in declaration order.
    fn fields() -> &'static [FieldMeta];

    /// Read a field by member name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Write submitted text into a field by member name.
    ///
    /// # Errors
    ///
    /// [`BindError::UnknownField`] for a name outside the table,
    /// [`BindError::Invalid`] when conversion fails.
    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), BindError>;

    /// Write every value submitted for a multi-value member.
    ///
    /// The default accepts at most one value and hands it to
    /// [`set_field`](Self::set_field). Entities holding list fields override
    /// this to replace the whole list.
    ///
    /// # Errors
    ///
    /// [`BindError::MultipleValues`] when the default receives more than one
    /// value, otherwise whatever [`set_field`](Self::set_field) raises.
    fn set_field_values(&mut self, name: &str, raws: &[&str]) -> Result<(), BindError> {
        match raws {
            [] => Ok(()),
            [raw] => self.set_field(name, raw),
            _ => Err(BindError::MultipleValues(name.to_owned()))
        }
    }

    /// Look up the metadata of a field.
    fn field_meta(name: &str) -> Option<&'static FieldMeta> {
        Self::fields().iter().find(|meta| meta.name == name)
    }
}

/// Parse a required non-text field.
///
/// Used by generated setters.
///
/// # Errors
///
/// [`BindError::Invalid`] carrying the parser's message.
pub fn parse_value<T>(field: &str, raw: &str) -> Result<T, BindError>
where
    T: FromStr,
    T::Err: Display
{
    raw.trim().parse().map_err(|e: T::Err| BindError::Invalid {
        field:   field.to_owned(),
        value:   raw.to_owned(),
        message: e.to_string()
    })
}

/// Parse an optional non-text field; blank input yields `None`.
///
/// # Errors
///
/// [`BindError::Invalid`] carrying the parser's message.
pub fn parse_optional<T>(field: &str, raw: &str) -> Result<Option<T>, BindError>
where
    T: FromStr,
    T::Err: Display
{
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_value(field, raw).map(Some)
}

/// Convert an optional text input; empty input yields `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_owned())
}
