//! Fixed-size page slicing.
//!
//! Page numbers are 1-based. Out-of-range requests clamp to the nearest
//! valid page instead of failing.

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Page actually served after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first item on this page, 0 when empty.
    pub fn first_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamp a requested page to `1..=total_pages` (1 for empty input).
    pub fn clamp_page(&self, len: usize, requested: usize) -> usize {
        requested.clamp(1, self.total_pages(len).max(1))
    }

    pub fn paginate<'a, T>(&self, items: &'a [T], requested: usize) -> Page<'a, T> {
        let total_pages = self.total_pages(items.len());
        let page = self.clamp_page(items.len(), requested);
        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());

        Page {
            items: &items[start..end],
            page,
            total_pages,
            total_items: items.len(),
            page_size: self.page_size,
        }
    }
}
