use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::api::error::SystemError;
use crate::modules::gallery::source::{Page, PageSource};

/// Outcome of a boundary-reached trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAdvance {
    /// The next page was appended; carries the number of new items.
    Loaded(usize),
    /// No further pages exist.
    End,
    /// A fetch was already in flight; this trigger was dropped.
    Suppressed,
}

/// Accumulating consumer for the public gallery: successive pages are
/// appended to one growing, ordered sequence. Scoped to a single client
/// session; the in-flight flag is never shared between sessions.
pub struct GalleryFeed<S: PageSource> {
    source: S,
    limit: u32,
    in_flight: AtomicBool,
    state: Mutex<FeedState<S::Item>>,
}

struct FeedState<T> {
    items: Vec<T>,
    page: u32,
    has_more: bool,
}

impl<S: PageSource> GalleryFeed<S> {
    pub fn new(source: S, limit: u32) -> Self {
        Self {
            source,
            limit,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(FeedState { items: Vec::new(), page: 0, has_more: true }),
        }
    }

    /// Fetches page 1, replacing anything accumulated so far. An empty
    /// collection (`total_pages == 0`) is a valid terminal state.
    pub async fn load_first(&self) -> Result<(), SystemError> {
        let fetched = self.source.fetch_page(1, self.limit).await?;
        let mut state = self.state.lock().unwrap();
        state.page = 1;
        state.has_more = 1 < fetched.total_pages;
        state.items = fetched.items;
        Ok(())
    }

    /// Boundary-reached trigger. At most one fetch runs at a time; triggers
    /// arriving while one is in flight are suppressed, not queued.
    pub async fn load_more(&self) -> Result<FeedAdvance, SystemError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(FeedAdvance::Suppressed);
        }

        let next_page = {
            let state = self.state.lock().unwrap();
            if !state.has_more {
                self.in_flight.store(false, Ordering::Release);
                return Ok(FeedAdvance::End);
            }
            state.page + 1
        };

        let fetched = self.source.fetch_page(next_page, self.limit).await;
        self.in_flight.store(false, Ordering::Release);
        let fetched: Page<S::Item> = fetched?;

        let mut state = self.state.lock().unwrap();
        if fetched.items.is_empty() {
            state.has_more = false;
            return Ok(FeedAdvance::End);
        }

        let appended = fetched.items.len();
        state.items.extend(fetched.items);
        state.page = next_page;
        state.has_more = next_page < fetched.total_pages;
        Ok(FeedAdvance::Loaded(appended))
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().unwrap().has_more
    }

    pub fn page(&self) -> u32 {
        self.state.lock().unwrap().page
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: PageSource> GalleryFeed<S>
where
    S::Item: Clone,
{
    pub fn items(&self) -> Vec<S::Item> {
        self.state.lock().unwrap().items.clone()
    }
}
