use serde::Serialize;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// 1-based page request. Out-of-range values are clamped when the page is cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    fn effective_page_size(self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// One slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Page actually served after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Cut `items` down to the requested page.
///
/// A page past the end is pulled back to the last page, so shrinking a filtered set never
/// yields an empty page while results remain.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let page_size = request.effective_page_size();
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = request.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenated_pages_reproduce_the_input() {
        let items: Vec<u32> = (0..23).collect();
        let first = paginate(items.clone(), PageRequest::new(1, 10));
        assert_eq!(first.total_pages, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages {
            rebuilt.extend(paginate(items.clone(), PageRequest::new(page, 10)).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items: Vec<u32> = (0..12).collect();
        let page = paginate(items.clone(), PageRequest::new(9, 10));
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![10, 11]);
        assert!(!page.has_next());
        assert!(page.has_previous());

        let page = paginate(items, PageRequest::new(0, 10));
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn empty_sets_serve_an_empty_first_page() {
        let page = paginate(Vec::<u32>::new(), PageRequest::new(4, 10));
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_size_is_bounded() {
        let items: Vec<u32> = (0..250).collect();
        let page = paginate(items.clone(), PageRequest::new(1, 0));
        assert_eq!(page.page_size, 1);
        let page = paginate(items, PageRequest::new(1, 1_000));
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(page.total_pages, 3);
    }
}
