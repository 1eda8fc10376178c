// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Render and redirect instructions returned by controller actions.

use std::fmt;

use super::state::ModelState;
use crate::projection::{IndexModel, ModelInstance};

/// Name of the view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ViewName {
    /// Paged list.
    Index,
    /// Read-only details.
    Details,
    /// Edit form.
    Edit,
    /// Create form.
    Create,
    /// Delete confirmation.
    Delete,
    /// Entity was deleted.
    Deleted,
    /// Delete failed.
    NotDeleted,
    /// Requested key does not exist.
    EntityNotFound
}

impl ViewName {
    /// View name as used by the rendering layer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Details => "Details",
            Self::Edit => "Edit",
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::Deleted => "Deleted",
            Self::NotDeleted => "NotDeleted",
            Self::EntityNotFound => "EntityNotFound"
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model handed to a view.
pub enum ViewModel<E> {
    /// One page of projected entities.
    Index(IndexModel<E>),

    /// One projected entity.
    Instance(ModelInstance<E>),

    /// Raw key that was not found.
    NotFound(String)
}

impl<E> ViewModel<E> {
    /// Index model, if any.
    pub const fn as_index(&self) -> Option<&IndexModel<E>> {
        match self {
            Self::Index(m) => Some(m),
            _ => None
        }
    }

    /// Projected instance, if any.
    pub const fn as_instance(&self) -> Option<&ModelInstance<E>> {
        match self {
            Self::Instance(m) => Some(m),
            _ => None
        }
    }

    /// Missing key, if any.
    pub fn as_not_found(&self) -> Option<&str> {
        match self {
            Self::NotFound(key) => Some(key),
            _ => None
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ViewModel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(m) => f.debug_tuple("Index").field(m).finish(),
            Self::Instance(m) => f.debug_tuple("Instance").field(m).finish(),
            Self::NotFound(key) => f.debug_tuple("NotFound").field(key).finish()
        }
    }
}

/// Render instruction.
#[derive(Debug)]
pub struct ViewResult<E> {
    /// View to render.
    pub view: ViewName,

    /// Model for the view.
    pub model: ViewModel<E>,

    /// Errors to show with the view.
    pub model_state: ModelState
}

impl<E> ViewResult<E> {
    pub(crate) fn new(view: ViewName, model: ViewModel<E>) -> Self {
        Self {
            view,
            model,
            model_state: ModelState::new()
        }
    }

    pub(crate) fn with_model_state(mut self, model_state: ModelState) -> Self {
        self.model_state = model_state;
        self
    }
}

/// Redirect instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Redirect {
    /// Canonical index page, 1-based.
    Index {
        /// Page number.
        page: usize
    },

    /// Details of an entity.
    Details {
        /// Entity key.
        key: String
    }
}

impl Redirect {
    /// Target action name.
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Index { .. } => "Index",
            Self::Details { .. } => "Details"
        }
    }
}

/// Outcome of a controller action.
#[derive(Debug)]
pub enum ActionResult<E> {
    /// Render a view.
    View(ViewResult<E>),

    /// Redirect the client.
    Redirect(Redirect)
}

impl<E> ActionResult<E> {
    pub(crate) fn view(view: ViewName, model: ViewModel<E>) -> Self {
        Self::View(ViewResult::new(view, model))
    }

    /// Render instruction, if this is one.
    pub const fn as_view(&self) -> Option<&ViewResult<E>> {
        match self {
            Self::View(v) => Some(v),
            Self::Redirect(_) => None
        }
    }

    /// Redirect instruction, if this is one.
    pub const fn as_redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(r) => Some(r),
            Self::View(_) => None
        }
    }

    /// Rendered view name, if a view is rendered.
    pub fn view_name(&self) -> Option<ViewName> {
        self.as_view().map(|v| v.view)
    }

    /// Take the render instruction.
    pub fn into_view(self) -> Option<ViewResult<E>> {
        match self {
            Self::View(v) => Some(v),
            Self::Redirect(_) => None
        }
    }
}
