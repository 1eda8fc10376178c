// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Owned renderings of projections.
//!
//! Model instances borrow their descriptor's selectors and cannot leave the
//! request. Snapshots evaluate everything a view needs into plain data that
//! serializes with the `serde` feature.

use super::{ChoiceItem, MemberPresentation, RelatedLink, ViewMode};
use crate::paging::{PageLink, PagedList, PrevNext};

/// Evaluated value of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SnapshotValue {
    /// Single-value member.
    Single {
        /// Canonical value.
        value:         String,
        /// User-facing value.
        visible_value: String
    },

    /// Multi-value member.
    Multi {
        /// Canonical values.
        values:         Vec<String>,
        /// User-facing values.
        visible_values: Vec<String>
    }
}

/// Evaluated member of a model instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberSnapshot {
    /// Member name; also the form field name.
    pub name: String,

    /// Display label.
    pub label: String,

    /// How the member renders in this view.
    pub presentation: MemberPresentation,

    /// Referenced entity name, if any.
    pub related_entity_name: Option<String>,

    /// Evaluated value.
    pub value: SnapshotValue,

    /// Choice list; only filled for editable members.
    pub choices: Vec<ChoiceItem>,

    /// Related links; only filled for read-only references.
    pub links: Vec<RelatedLink>
}

/// Evaluated model instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InstanceSnapshot {
    /// Logical entity name.
    pub entity_name: String,

    /// Trimmed entity key.
    pub key: String,

    /// View the instance was projected for.
    pub view_mode: ViewMode,

    /// Members visible in the view, in display order.
    pub members: Vec<MemberSnapshot>
}

/// Paging bookkeeping of an index page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageInfo {
    /// One-based page number.
    pub page_number: usize,

    /// Configured page size.
    pub page_size: usize,

    /// Size of the whole collection.
    pub total_count: usize,

    /// Number of pages.
    pub total_pages: usize,

    /// Numbered pager links.
    pub links: Vec<PageLink>,

    /// Previous and next page numbers.
    pub prev_next: PrevNext
}

impl PageInfo {
    /// Collect bookkeeping of a paged list.
    pub fn of<T>(list: &PagedList<T>) -> Self {
        Self {
            page_number: list.page_number(),
            page_size:   list.page_size(),
            total_count: list.total_count(),
            total_pages: list.total_pages(),
            links:       list.page_links(),
            prev_next:   list.prev_next()
        }
    }
}

/// Evaluated index page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexSnapshot {
    /// Logical entity name.
    pub entity_name: String,

    /// Labels of the columns shown on the index.
    pub labels: Vec<String>,

    /// One entry per entity on the page.
    pub rows: Vec<InstanceSnapshot>,

    /// Paging bookkeeping.
    pub page: PageInfo
}
