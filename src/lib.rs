pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpTextGenerator, JsonRenderer, TextRenderer};
pub use app::session::{SearchDefaults, Session, SessionSummary};
pub use crate::core::{
    augment::ExplanationAugmenter, display::display, scraper::Scraper,
    search_client::SearchClient,
};
pub use domain::model::{Entry, EntryRecord, ResultSet, SearchRequest};
pub use domain::ports::{Renderer, TextGenerator};
pub use utils::error::{Result, ScraperError};
