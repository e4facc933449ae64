pub mod feed;
pub mod pager;
pub mod source;

pub use feed::{FeedAdvance, GalleryFeed};
pub use pager::GalleryPager;
pub use source::{Page, PageSource};
