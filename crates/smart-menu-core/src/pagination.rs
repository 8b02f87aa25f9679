//! Client-side pagination over already-loaded lists.

/// Number of pages for `total` items; zero items still yields zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice of `items` shown on 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Current page plus bounds, as shown by the pager component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size, total_items: 0 }
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_items, self.page_size)
    }

    /// Replaces the item count and pulls the page back into range
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// 1-based index of the first and last item on the page, for
    /// "Showing X to Y of Z"
    pub fn showing_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(self.total_items);
        (first, last)
    }

    /// Up to `width` page numbers centred on the current page
    pub fn window(&self, width: usize) -> Vec<usize> {
        let total = self.total_pages();
        if total == 0 || width == 0 {
            return Vec::new();
        }
        let width = width.min(total);
        let start = self.page.saturating_sub(width / 2).max(1).min(total - width + 1);
        (start..start + width).collect()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_paginator_navigation() {
        let mut p = Paginator::new(10);
        p.set_total(25);
        assert_eq!(p.total_pages(), 3);
        assert!(!p.has_prev());
        p.next();
        p.next();
        p.next();
        assert_eq!(p.page, 3);
        assert_eq!(p.showing_range(), (21, 25));

        p.set_total(12);
        assert_eq!(p.page, 2);
        p.go_to(99);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_page_window_stays_in_bounds() {
        let mut p = Paginator::new(10);
        p.set_total(95);
        assert_eq!(p.window(5), vec![1, 2, 3, 4, 5]);
        p.go_to(6);
        assert_eq!(p.window(5), vec![4, 5, 6, 7, 8]);
        p.go_to(10);
        assert_eq!(p.window(5), vec![6, 7, 8, 9, 10]);
        p.set_total(20);
        assert_eq!(p.window(5), vec![1, 2]);
    }

    #[test]
    fn test_paginator_empty() {
        let mut p = Paginator::new(10);
        p.set_total(0);
        assert_eq!(p.page, 1);
        assert_eq!(p.showing_range(), (0, 0));
        assert!(!p.has_next());
    }
}
