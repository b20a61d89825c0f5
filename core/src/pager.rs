//! Navigation state for a paginated view.
//!
//! `Pager` owns the active page and page count for one view and funnels
//! every navigation through a single clamped `set_page`. A caller-supplied
//! callback observes each navigation; the computed marker strip is cached
//! between navigations.

use std::cell::RefCell;
use std::fmt;

use crate::marker::PageMarker;
use crate::range::page_range;
use crate::PaginationConfig;

/// Callback invoked with the new active page after each navigation.
pub type PageChangeFn = Box<dyn FnMut(usize)>;

/// Stateful page navigator with a cached marker strip.
///
/// The pager tolerates an out-of-range initial page: the strip simply has
/// no highlighted slot until the first explicit navigation corrects it.
pub struct Pager {
    config: PaginationConfig,
    total: usize,
    active: usize,
    on_change: Option<PageChangeFn>,
    cache: RefCell<Option<StripCache>>,
}

/// Marker strip memoized for one `(total, active)` pair.
struct StripCache {
    total: usize,
    active: usize,
    markers: Vec<PageMarker>,
}

impl Pager {
    /// Create a pager over `total` pages, starting at the configured
    /// initial page.
    pub fn new(total: usize, config: PaginationConfig) -> Self {
        Self {
            active: config.initial_page,
            config,
            total,
            on_change: None,
            cache: RefCell::new(None),
        }
    }

    /// Create a pager and register the page-change callback in one step.
    pub fn with_on_change(total: usize, config: PaginationConfig, on_change: PageChangeFn) -> Self {
        let mut pager = Self::new(total, config);
        pager.on_change = Some(on_change);
        pager
    }

    /// Register or replace the page-change callback.
    pub fn set_on_change(&mut self, on_change: PageChangeFn) {
        self.on_change = Some(on_change);
    }

    /// Get the active page (1-based).
    pub fn active(&self) -> usize {
        self.active
    }

    /// Get the page count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the display configuration.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Replace the page count after the underlying item count or page size
    /// changed.
    ///
    /// The active page is left untouched; the next explicit navigation
    /// clamps it into the new span.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Whether a page before the active one exists.
    pub fn has_previous(&self) -> bool {
        self.active > 1
    }

    /// Whether a page after the active one exists.
    pub fn has_next(&self) -> bool {
        self.active < self.total
    }

    /// Navigate to `page`, clamped into `1..=total`.
    ///
    /// The callback fires with the clamped page even when the active page
    /// did not move, so a caller refetching on every navigation request
    /// stays in sync. With no pages at all, navigation is disabled: state
    /// and callback stay untouched.
    pub fn set_page(&mut self, page: usize) {
        if self.total == 0 {
            return;
        }
        let page = page.clamp(1, self.total);
        tracing::trace!(page, previous = self.active, "page change");
        self.active = page;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(page);
        }
    }

    /// Navigate to the next page, staying on the last one at the end.
    pub fn next(&mut self) {
        self.set_page(self.active + 1);
    }

    /// Navigate to the previous page, staying on the first one at the
    /// start.
    pub fn previous(&mut self) {
        self.set_page(self.active.saturating_sub(1));
    }

    /// Navigate to the first page.
    pub fn first(&mut self) {
        self.set_page(1);
    }

    /// Navigate to the last page.
    pub fn last(&mut self) {
        self.set_page(self.total);
    }

    /// Return to the configured initial page without firing the callback.
    pub fn reset(&mut self) {
        self.active = self.config.initial_page;
    }

    /// The marker strip for the current page and page count.
    ///
    /// Recomputed only when the page or page count changed since the last
    /// call; otherwise the previous strip is reused.
    pub fn range(&self) -> Vec<PageMarker> {
        let mut cache = self.cache.borrow_mut();
        match cache.as_ref() {
            Some(c) if c.total == self.total && c.active == self.active => c.markers.clone(),
            _ => {
                let markers = page_range(
                    self.total,
                    self.active,
                    self.config.siblings,
                    self.config.boundaries,
                );
                *cache = Some(StripCache {
                    total: self.total,
                    active: self.active,
                    markers: markers.clone(),
                });
                markers
            }
        }
    }
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("total", &self.total)
            .field("active", &self.active)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn pager(total: usize) -> Pager {
        Pager::new(total, PaginationConfig::default())
    }

    #[test]
    fn test_set_page_clamps_low_and_high() {
        let mut p = pager(10);
        p.set_page(0);
        assert_eq!(p.active(), 1);
        p.set_page(99);
        assert_eq!(p.active(), 10);
        p.set_page(4);
        assert_eq!(p.active(), 4);
    }

    #[test]
    fn test_next_and_previous_saturate() {
        let mut p = pager(3);
        p.previous();
        assert_eq!(p.active(), 1);
        p.next();
        p.next();
        assert_eq!(p.active(), 3);
        p.next();
        assert_eq!(p.active(), 3);
    }

    #[test]
    fn test_first_last_round_trip() {
        let mut p = pager(10);
        for k in 1..=10 {
            p.first();
            p.last();
            p.set_page(k);
            assert_eq!(p.active(), k);
        }
    }

    #[test]
    fn test_callback_receives_clamped_pages() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut p = Pager::with_on_change(
            10,
            PaginationConfig::default(),
            Box::new(move |page| sink.borrow_mut().push(page)),
        );

        p.set_page(4);
        p.next();
        p.set_page(99);
        assert_eq!(*seen.borrow(), vec![4, 5, 10]);
    }

    #[test]
    fn test_callback_fires_without_movement() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut p = Pager::with_on_change(
            2,
            PaginationConfig::default(),
            Box::new(move |page| sink.borrow_mut().push(page)),
        );

        p.last();
        p.next();
        assert_eq!(p.active(), 2);
        assert_eq!(*seen.borrow(), vec![2, 2]);
    }

    #[test]
    fn test_navigation_disabled_without_pages() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut p = Pager::with_on_change(
            0,
            PaginationConfig::default(),
            Box::new(move |page| sink.borrow_mut().push(page)),
        );

        p.set_page(3);
        p.next();
        p.last();
        assert_eq!(p.active(), 1);
        assert!(seen.borrow().is_empty());
        assert!(p.range().is_empty());
    }

    #[test]
    fn test_out_of_range_initial_corrected_on_navigation() {
        let config = PaginationConfig {
            initial_page: 12,
            ..PaginationConfig::default()
        };
        let mut p = Pager::new(10, config);
        assert_eq!(p.active(), 12);
        p.next();
        assert_eq!(p.active(), 10);
    }

    #[test]
    fn test_set_total_defers_clamping() {
        let mut p = pager(10);
        p.last();
        p.set_total(4);
        assert_eq!(p.active(), 10);
        p.next();
        assert_eq!(p.active(), 4);
    }

    #[test]
    fn test_has_previous_and_next() {
        let mut p = pager(3);
        assert!(!p.has_previous());
        assert!(p.has_next());
        p.last();
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn test_range_follows_navigation() {
        let mut p = pager(10);
        assert_eq!(p.range(), p.range());
        let start = p.range();
        p.set_page(5);
        let middle = p.range();
        assert_ne!(start, middle);
        assert!(middle.contains(&PageMarker::Page(5)));
    }

    #[test]
    fn test_reset_returns_to_initial_silently() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut p = Pager::with_on_change(
            10,
            PaginationConfig::default(),
            Box::new(move |page| sink.borrow_mut().push(page)),
        );

        p.set_page(5);
        p.reset();
        assert_eq!(p.active(), 1);
        assert_eq!(*seen.borrow(), vec![5]);
    }
}
