use crate::api::error::SystemError;

/// One window of an offset-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
}

/// The listing contract shared by the public feed and the admin pager.
/// `total_pages` is `ceil(total / limit)`; a page past the end yields an
/// empty `items` vector, not an error.
#[async_trait::async_trait]
pub trait PageSource {
    type Item;

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<Self::Item>, SystemError>;
}
