//! Pagination state shared by the list views
//!
//! Navigation never leaves `1..=total_pages`; every method that moves the
//! page returns whether a refetch is needed.

use shared::Page;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    size: u32,
    total_pages: u32,
    total_items: Option<u64>,
    shown: usize,
}

impl Pager {
    /// Pager on page 1; sizes outside the offered options fall back to 10
    pub fn new(size: u32) -> Self {
        Self {
            page: 1,
            size: if PAGE_SIZE_OPTIONS.contains(&size) {
                size
            } else {
                DEFAULT_PAGE_SIZE
            },
            total_pages: 1,
            total_items: None,
            shown: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Switch page size; a change goes back to page 1
    pub fn set_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) || size == self.size {
            return false;
        }
        self.size = size;
        self.page = 1;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1)
    }

    pub fn go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Back to page 1 (search or filter change); true if the page moved
    pub fn reset(&mut self) -> bool {
        let moved = self.page != 1;
        self.page = 1;
        moved
    }

    /// Take the counts of a freshly fetched page. Returns true when the
    /// current page no longer exists and was moved back to the last one,
    /// in which case the rows held belong to the old page.
    pub fn apply<T>(&mut self, page: &Page<T>) -> bool {
        self.total_pages = page.total_pages.max(1);
        self.total_items = page.total_items;
        self.shown = page.items.len();
        if self.page > self.total_pages {
            self.page = self.total_pages;
            return true;
        }
        false
    }

    /// After a failed fetch: no rows, one page
    pub fn clear(&mut self) {
        self.total_pages = 1;
        self.total_items = None;
        self.shown = 0;
    }

    /// 1-based row number of the `index`-th row on this page
    pub fn row_number(&self, index: usize) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size) + index as u64 + 1
    }

    /// "Showing 11 to 20 of 42 results"; "of N" only when the server sent N
    pub fn label(&self) -> String {
        let offset = u64::from(self.page - 1) * u64::from(self.size);
        let (from, to) = if self.shown == 0 {
            (0, 0)
        } else {
            (offset + 1, offset + self.shown as u64)
        };
        match self.total_items {
            Some(total) => format!("Showing {from} to {to} of {total} results"),
            None => format!("Showing {from} to {to} results"),
        }
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
