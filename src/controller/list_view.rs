// ABOUTME: Local filtering and pagination over a fetched resource list
// ABOUTME: Fixed page size, ceil-based page count, filter changes reset to the first page

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt::Debug;

use crate::constants::ITEMS_PER_PAGE;

/// Predicate selecting which items a list screen shows
pub trait ListFilter<T>: Copy + Default + PartialEq + Debug {
    /// Whether `item` passes the filter
    fn matches(&self, item: &T) -> bool;
}

/// Filter for screens without one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl<T> ListFilter<T> for NoFilter {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Current filter and page of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView<F> {
    filter: F,
    page: usize,
}

impl<F: Default> Default for ListView<F> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            page: 1,
        }
    }
}

/// One rendered page
#[derive(Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    /// Items on this page, in list order
    pub items: Vec<&'a T>,
    /// 1-based page number actually shown
    pub page: usize,
    /// `ceil(total_items / ITEMS_PER_PAGE)`
    pub total_pages: usize,
    /// Items passing the filter
    pub total_items: usize,
}

impl<'a, T> PageSlice<'a, T> {
    /// Whether the filtered list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Number of pages needed for `len` items
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    len.div_ceil(ITEMS_PER_PAGE)
}

impl<F> ListView<F> {
    /// First page, default filter
    #[must_use]
    pub fn new() -> Self
    where
        F: Default,
    {
        Self::default()
    }

    /// Active filter
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Requested page (1-based)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Change the filter and go back to page 1
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    /// Go to `page`, clamped into `1..=max(total_pages, 1)`
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Filter `items` and cut out the current page
    ///
    /// A page beyond the end (the list shrank after a refresh) shows the last page.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> PageSlice<'a, T>
    where
        F: ListFilter<T>,
    {
        let filtered: Vec<&T> = items.iter().filter(|item| self.filter.matches(item)).collect();
        let total_items = filtered.len();
        let total_pages = total_pages(total_items);
        let page = self.page.clamp(1, total_pages.max(1));

        let items = filtered
            .into_iter()
            .skip((page - 1) * ITEMS_PER_PAGE)
            .take(ITEMS_PER_PAGE)
            .collect();

        PageSlice {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}
