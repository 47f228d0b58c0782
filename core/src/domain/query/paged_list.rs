use serde::{Deserialize, Serialize};

/// One page of a filtered and ordered sequence, plus the counts it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> PagedList<T> {
    /// Slices `source` to the requested page.
    ///
    /// `page_number` and `page_size` are expected to be at least 1. A page past the
    /// end is not an error, it yields no items with consistent counts.
    pub fn create(source: Vec<T>, page_number: u64, page_size: u64) -> Self {
        let total_count = source.len() as u64;
        let total_pages = total_count.div_ceil(page_size.max(1));
        let offset = page_number.saturating_sub(1).saturating_mul(page_size);

        let items = source
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(page_size).unwrap_or(usize::MAX))
            .collect();

        Self {
            items,
            current_page: page_number,
            page_size,
            total_count,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Maps items while preserving the page counts.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}
