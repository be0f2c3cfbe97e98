//! Listing State
//!
//! In-memory collection with a filtered view and fixed-size pages. Every
//! admin table keeps one of these behind a signal.

use std::ops::RangeInclusive;

use crate::models::Record;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Full collection, filtered view, and paging cursor.
///
/// The filtered view is stored as indices into the full collection, so it is
/// always a subset in the original order. The current page stays within
/// `1..=max(1, total_pages)`.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    visible: Vec<usize>,
    page: usize,
    page_size: usize,
    pending_delete: Option<u32>,
}

/// "Showing X to Y of Z" numbers for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Page-number buttons to render under a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub pages: Vec<usize>,
    pub current: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> Listing<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            pending_delete: None,
        }
    }

    /// Swap in a freshly loaded collection, keeping the active filter and page.
    pub fn replace(&mut self, items: Vec<T>, keep: impl Fn(&T) -> bool) {
        self.items = items;
        self.visible = Self::select(&self.items, keep);
        self.clamp_page();
    }

    /// Re-filter the collection and go back to the first page.
    pub fn apply(&mut self, keep: impl Fn(&T) -> bool) {
        self.visible = Self::select(&self.items, keep);
        self.page = 1;
    }

    fn select(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| keep(item))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    #[cfg(test)]
    pub fn filtered(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |&idx| &self.items[idx])
    }

    #[cfg(test)]
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[cfg(test)]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    fn bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        (start, end)
    }

    /// Records on the current page.
    pub fn page_items(&self) -> Vec<&T> {
        let (start, end) = self.bounds();
        self.visible[start..end].iter().map(|&idx| &self.items[idx]).collect()
    }

    pub fn range(&self) -> PageRange {
        let (start, end) = self.bounds();
        PageRange {
            first: if self.visible.is_empty() { 0 } else { start + 1 },
            last: end,
            total: self.visible.len(),
        }
    }

    /// Buttons for a sliding window of `width` pages, or `None` for a single page.
    pub fn controls(&self, width: usize) -> Option<PageControls> {
        let total = self.total_pages();
        if total <= 1 {
            return None;
        }
        Some(PageControls {
            pages: page_window(self.page, total, width).collect(),
            current: self.page,
            has_prev: self.page > 1,
            has_next: self.page < total,
        })
    }

    pub fn pending_delete(&self) -> Option<u32> {
        self.pending_delete
    }

    pub fn clear_pending_delete(&mut self) {
        self.pending_delete = None;
    }
}

impl<T: Record> Listing<T> {
    pub fn find(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Remember which record the delete modal is asking about.
    pub fn mark_for_delete(&mut self, id: u32) -> Option<&T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        self.pending_delete = Some(id);
        Some(&self.items[idx])
    }
}

/// Sliding window of page numbers centred on `current`, clamped to `1..=total`.
pub fn page_window(current: usize, total: usize, width: usize) -> RangeInclusive<usize> {
    if total == 0 || width == 0 {
        return 1..=0;
    }
    let span = width - 1;
    let half = span / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + span).min(total);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
    }

    impl Record for Row {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n).map(|id| Row { id, name: format!("row {}", id) }).collect()
    }

    fn listing(n: u32) -> Listing<Row> {
        let mut listing = Listing::new(DEFAULT_PAGE_SIZE);
        listing.replace(rows(n), |_| true);
        listing
    }

    #[test]
    fn test_pages_cover_filtered_collection() {
        for page_size in 1..=13 {
            for n in [0u32, 1, 9, 10, 11, 25, 40] {
                let mut listing = Listing::new(page_size);
                listing.replace(rows(n), |row| row.id % 3 != 0);
                let mut seen = 0;
                for page in 1..=listing.total_pages().max(1) {
                    listing.set_page(page);
                    seen += listing.page_items().len();
                }
                assert_eq!(seen, listing.filtered_len(), "page_size={} n={}", page_size, n);
            }
        }
    }

    #[test]
    fn test_filter_preserves_order_and_resets_page() {
        let mut listing = listing(30);
        listing.set_page(3);
        listing.apply(|row| row.id % 2 == 0);

        assert_eq!(listing.page(), 1);
        let ids: Vec<u32> = listing.filtered().map(|row| row.id).collect();
        assert_eq!(ids, (1..=15).map(|n| n * 2).collect::<Vec<_>>());
        assert!(listing.filtered().all(|row| listing.all().contains(row)));
    }

    #[test]
    fn test_page_is_clamped() {
        let mut listing = listing(25);
        listing.set_page(0);
        assert_eq!(listing.page(), 1);
        listing.set_page(99);
        assert_eq!(listing.page(), 3);
        assert_eq!(listing.page_items().len(), 5);

        listing.set_page(2);
        assert_eq!(listing.page(), 2);
        assert_eq!(listing.page_items().len(), 10);
    }

    #[test]
    fn test_reload_keeps_filter_and_clamps_page() {
        let mut listing = listing(35);
        listing.set_page(4);
        listing.replace(rows(12), |_| true);
        assert_eq!(listing.page(), 2);

        listing.replace(Vec::new(), |_| true);
        assert_eq!(listing.page(), 1);
        assert_eq!(listing.total_pages(), 0);
        assert!(listing.page_items().is_empty());
    }

    #[test]
    fn test_range_summary() {
        let mut listing = listing(23);
        assert_eq!(listing.range(), PageRange { first: 1, last: 10, total: 23 });
        listing.set_page(3);
        assert_eq!(listing.range(), PageRange { first: 21, last: 23, total: 23 });

        listing.apply(|_| false);
        assert_eq!(listing.range(), PageRange { first: 0, last: 0, total: 0 });
    }

    #[test]
    fn test_page_window_slides_and_clamps() {
        assert_eq!(page_window(1, 10, 5), 1..=5);
        assert_eq!(page_window(2, 10, 5), 1..=5);
        assert_eq!(page_window(6, 10, 5), 4..=8);
        assert_eq!(page_window(9, 10, 5), 6..=10);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(2, 3, 5), 1..=3);
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        assert!(listing(10).controls(DEFAULT_PAGE_WINDOW).is_none());

        let mut listing = listing(60);
        listing.set_page(6);
        let controls = listing.controls(DEFAULT_PAGE_WINDOW).unwrap();
        assert_eq!(controls.pages, vec![2, 3, 4, 5, 6]);
        assert!(controls.has_prev);
        assert!(!controls.has_next);
    }

    #[test]
    fn test_pending_delete_tracks_known_ids() {
        let mut listing = listing(3);
        assert!(listing.mark_for_delete(9).is_none());
        assert_eq!(listing.pending_delete(), None);

        let row = listing.mark_for_delete(2).unwrap();
        assert_eq!(row.name, "row 2");
        assert_eq!(listing.pending_delete(), Some(2));
        listing.clear_pending_delete();
        assert_eq!(listing.pending_delete(), None);
    }
}
