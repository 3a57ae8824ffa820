use crate::domain::model::EntryRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the search endpoint settings come from.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> Option<&str>;
}

/// An opaque text-to-text capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        max_length: u32,
        num_return_sequences: u32,
    ) -> Result<Vec<String>>;
}

pub trait Renderer {
    fn notice(&mut self, message: &str) -> Result<()>;
    fn error(&mut self, message: &str) -> Result<()>;
    fn record(&mut self, record: &EntryRecord<'_>) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
