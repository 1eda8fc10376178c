// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Paging primitives.
//!
//! - [`Pagination`] - limit/offset window passed to repositories
//! - [`PagedList`] - one page of items plus total-count bookkeeping
//! - [`clamp_page_index`] - maps any requested index onto an existing page
//! - [`page_links`] / [`PrevNext`] - pager data for the view layer
//!
//! Page indices are zero-based everywhere except in pager links and
//! redirects, which carry the one-based page number users see.

use std::ops::Deref;

/// Window of a list query.
///
/// # Example
///
/// ```rust
/// use scaffold_core::Pagination;
///
/// let first = Pagination::page(0, 5); // offset=0, limit=5
/// let third = Pagination::page(2, 5); // offset=10, limit=5
/// assert_eq!(third.offset, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: usize,

    /// Number of results to skip.
    pub offset: usize
}

impl Pagination {
    /// Create pagination parameters.
    pub const fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a zero-based page.
    pub const fn page(page_index: usize, page_size: usize) -> Self {
        Self {
            limit:  page_size,
            offset: page_index.saturating_mul(page_size)
        }
    }

    /// Apply the window to an ordered collection.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

/// Number of pages needed for `total_count` items.
///
/// A zero page size yields zero pages.
pub const fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Clamp a requested zero-based page index onto an existing page.
///
/// The result lies in `[0, max(0, total_pages - 1)]`, so an empty
/// collection still has page 0.
///
/// # Example
///
/// ```rust
/// use scaffold_core::clamp_page_index;
///
/// assert_eq!(clamp_page_index(-3, 3, 2), 0);
/// assert_eq!(clamp_page_index(1, 3, 2), 1);
/// assert_eq!(clamp_page_index(999_999, 3, 2), 1);
/// assert_eq!(clamp_page_index(4, 0, 5), 0);
/// ```
pub fn clamp_page_index(requested: i64, total_count: usize, page_size: usize) -> usize {
    let max_index = total_pages(total_count, page_size).saturating_sub(1);
    match usize::try_from(requested) {
        Ok(index) => index.min(max_index),
        Err(_) if requested < 0 => 0,
        Err(_) => max_index
    }
}

/// One page of a larger ordered collection.
///
/// The list does not clamp; an out-of-range index yields no items while
/// the totals stay correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items:       Vec<T>,
    total_count: usize,
    page_index:  usize,
    page_size:   usize
}

impl<T> PagedList<T> {
    /// Slice a page out of a fully materialized ordered source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scaffold_core::PagedList;
    ///
    /// let page = PagedList::from_source(vec!["Football", "Surf board", "Running shoes"], 0, 2);
    /// assert_eq!(page.items(), ["Football", "Surf board"]);
    /// assert_eq!(page.total_pages(), 2);
    /// assert!(page.has_next_page());
    /// ```
    pub fn from_source(source: Vec<T>, page_index: usize, page_size: usize) -> Self {
        let total_count = source.len();
        let items = Pagination::page(page_index, page_size).apply(source);
        Self {
            items,
            total_count,
            page_index,
            page_size
        }
    }

    /// Wrap a window already sliced by the source.
    pub fn from_window(
        items: Vec<T>,
        total_count: usize,
        page_index: usize,
        page_size: usize
    ) -> Self {
        Self {
            items,
            total_count,
            page_index,
            page_size
        }
    }

    /// Items of this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Size of the whole collection.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// One-based page number.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page_index.saturating_add(1)
    }

    /// Configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages in the whole collection.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Check if a previous page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Check if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages()
    }

    /// Transform the items, keeping the bookkeeping.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U
    {
        PagedList {
            items:       self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_index:  self.page_index,
            page_size:   self.page_size
        }
    }

    /// Pager links for this page.
    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page_number(), self.total_pages())
    }

    /// Previous and next page numbers.
    pub fn prev_next(&self) -> PrevNext {
        PrevNext::new(self.page_number(), self.total_pages())
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A numbered pager link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageLink {
    /// One-based page number.
    pub number: usize,

    /// Whether this is the current page.
    pub selected: bool
}

/// Numbered links for pages `1..=total_pages`.
pub fn page_links(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    (1..=total_pages)
        .map(|number| PageLink {
            number,
            selected: number == current_page
        })
        .collect()
}

/// Neighbouring page numbers of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrevNext {
    /// One-based previous page, if any.
    pub previous: Option<usize>,

    /// One-based next page, if any.
    pub next: Option<usize>
}

impl PrevNext {
    /// Compute neighbours of a one-based page.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            previous: (current_page > 1).then(|| current_page - 1),
            next:     (current_page < total_pages).then(|| current_page + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn products() -> Vec<&'static str> {
        vec!["Football", "Surf board", "Running shoes"]
    }

    #[test]
    fn pagination_page() {
        assert_eq!(Pagination::page(0, 25), Pagination::new(25, 0));
        assert_eq!(Pagination::page(2, 25).offset, 50);
        assert_eq!(Pagination::page(usize::MAX, 2).offset, usize::MAX);
    }

    #[test]
    fn pagination_apply_clips() {
        assert_eq!(Pagination::new(5, 2).apply(products()), ["Running shoes"]);
        assert!(Pagination::new(5, 9).apply(products()).is_empty());
    }

    #[test]
    fn first_page_of_two() {
        let page = PagedList::from_source(products(), 0, 2);
        assert_eq!(page.items(), ["Football", "Surf board"]);
        assert_eq!(page.total_count(), 3);
        assert_eq!(page.total_pages(), 2);
        assert!(!page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[test]
    fn last_page_is_clipped() {
        let page = PagedList::from_source(products(), 1, 2);
        assert_eq!(page.items(), ["Running shoes"]);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
        assert_eq!(page.page_number(), 2);
    }

    #[test]
    fn out_of_range_index_is_empty_not_clamped() {
        let page = PagedList::from_source(products(), 7, 2);
        assert!(page.is_empty());
        assert_eq!(page.page_index(), 7);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn extreme_index_saturates() {
        let page = PagedList::from_window(Vec::<u8>::new(), 3, usize::MAX, 2);
        assert_eq!(page.page_number(), usize::MAX);
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
        assert_eq!(page.prev_next().next, None);
        assert_eq!(page.page_links().len(), 2);
        assert!(page.page_links().iter().all(|link| !link.selected));

        let page = PagedList::from_source(vec![1, 2, 3], usize::MAX - 1, 2);
        assert!(page.is_empty());
        assert_eq!(page.page_number(), usize::MAX);
    }

    #[test]
    fn empty_source() {
        let page = PagedList::<u8>::from_source(Vec::new(), 0, 5);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next_page());
        assert!(page.page_links().is_empty());
    }

    #[test]
    fn window_and_map_keep_totals() {
        let page = PagedList::from_window(vec![3, 4], 10, 1, 2).map(|n| n * 10);
        assert_eq!(page.items(), [30, 40]);
        assert_eq!(page.total_count(), 10);
        assert_eq!(page.total_pages(), 5);
        assert_eq!(page.page_size(), 2);
        let collected: Vec<_> = (&page).into_iter().copied().collect();
        assert_eq!(collected, [30, 40]);
        assert_eq!(page.into_items(), vec![30, 40]);
    }

    #[test]
    fn clamp_examples() {
        assert_eq!(clamp_page_index(0, 3, 2), 0);
        assert_eq!(clamp_page_index(-1, 3, 2), 0);
        assert_eq!(clamp_page_index(i64::MIN, 3, 2), 0);
        assert_eq!(clamp_page_index(i64::MAX, 3, 2), 1);
        assert_eq!(clamp_page_index(999_999, 3, 2), 1);
        assert_eq!(clamp_page_index(0, 0, 5), 0);
        assert_eq!(clamp_page_index(2, 0, 5), 0);
    }

    #[test]
    fn links_mark_current_page() {
        let links = page_links(2, 3);
        assert_eq!(links.len(), 3);
        assert!(!links[0].selected);
        assert!(links[1].selected);
        assert_eq!(links[2].number, 3);
    }

    #[test]
    fn prev_next_bounds() {
        assert_eq!(
            PrevNext::new(1, 3),
            PrevNext {
                previous: None,
                next:     Some(2)
            }
        );
        assert_eq!(
            PrevNext::new(3, 3),
            PrevNext {
                previous: Some(2),
                next:     None
            }
        );
        let page = PagedList::from_source(products(), 0, 5);
        assert_eq!(
            page.prev_next(),
            PrevNext {
                previous: None,
                next:     None
            }
        );
    }

    proptest! {
        #[test]
        fn clamped_index_is_in_range(
            total in 0usize..10_000,
            size in 1usize..100,
            requested in any::<i64>()
        ) {
            let max = total.div_ceil(size).saturating_sub(1);
            let clamped = clamp_page_index(requested, total, size);
            prop_assert!(clamped <= max);
            if requested >= 0 && (requested as u64) <= max as u64 {
                prop_assert_eq!(clamped as i64, requested);
            }
        }

        #[test]
        fn slice_matches_source(
            len in 0usize..200,
            size in 1usize..20,
            index in 0usize..30
        ) {
            let source: Vec<usize> = (0..len).collect();
            let page = PagedList::from_source(source.clone(), index, size);
            let start = (index * size).min(len);
            let end = ((index + 1) * size).min(len);
            prop_assert_eq!(page.items(), &source[start..end]);
            prop_assert_eq!(page.total_pages(), len.div_ceil(size));
        }
    }
}
