pub mod augment;
pub mod display;
pub mod feed;
pub mod scraper;
pub mod search_client;

pub use crate::domain::model::{Entry, EntryRecord, ResultSet, SearchRequest};
pub use crate::domain::ports::{ConfigProvider, Renderer, TextGenerator};
pub use crate::utils::error::Result;
