use std::sync::Mutex;

use crate::api::error::SystemError;
use crate::modules::gallery::source::PageSource;

/// Windowed consumer for the admin table: exactly one page is held at a
/// time and each navigation replaces it. Navigation is refused past either
/// end instead of issuing a fetch.
pub struct GalleryPager<S: PageSource> {
    source: S,
    limit: u32,
    state: Mutex<PagerState<S::Item>>,
}

struct PagerState<T> {
    items: Vec<T>,
    page: u32,
    total: i64,
    total_pages: u32,
}

impl<S: PageSource> GalleryPager<S> {
    pub fn new(source: S, limit: u32) -> Self {
        Self {
            source,
            limit,
            state: Mutex::new(PagerState { items: Vec::new(), page: 1, total: 0, total_pages: 0 }),
        }
    }

    pub async fn load(&self, page: u32) -> Result<(), SystemError> {
        let fetched = self.source.fetch_page(page, self.limit).await?;
        let mut state = self.state.lock().unwrap();
        state.items = fetched.items;
        state.page = page;
        state.total = fetched.total;
        state.total_pages = fetched.total_pages;
        Ok(())
    }

    /// Re-fetches the current page, e.g. after a deletion shifted the
    /// collection under the displayed window.
    pub async fn refresh(&self) -> Result<(), SystemError> {
        let page = self.page();
        self.load(page).await
    }

    /// Advances one page; returns false without fetching when already on
    /// the last page (or the collection is empty).
    pub async fn next(&self) -> Result<bool, SystemError> {
        if !self.has_next() {
            return Ok(false);
        }
        let page = self.page() + 1;
        self.load(page).await?;
        Ok(true)
    }

    /// Steps back one page; returns false without fetching at page 1.
    pub async fn prev(&self) -> Result<bool, SystemError> {
        if !self.has_prev() {
            return Ok(false);
        }
        let page = self.page() - 1;
        self.load(page).await?;
        Ok(true)
    }

    pub fn has_prev(&self) -> bool {
        self.state.lock().unwrap().page > 1
    }

    pub fn has_next(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.page < state.total_pages
    }

    pub fn page(&self) -> u32 {
        self.state.lock().unwrap().page
    }

    pub fn total(&self) -> i64 {
        self.state.lock().unwrap().total
    }

    pub fn total_pages(&self) -> u32 {
        self.state.lock().unwrap().total_pages
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: PageSource> GalleryPager<S>
where
    S::Item: Clone,
{
    pub fn items(&self) -> Vec<S::Item> {
        self.state.lock().unwrap().items.clone()
    }
}
