use crate::core::augment::ExplanationAugmenter;
use crate::core::display::display;
use crate::core::search_client::SearchClient;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;

/// One user action: validate, fetch, sort, render.
pub struct Scraper {
    client: SearchClient,
    augmenter: Option<ExplanationAugmenter>,
}

impl Scraper {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            augmenter: None,
        }
    }

    pub fn with_augmenter(mut self, augmenter: ExplanationAugmenter) -> Self {
        self.augmenter = Some(augmenter);
        self
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    pub fn explains(&self) -> bool {
        self.augmenter.is_some()
    }

    pub async fn run<R: Renderer + ?Sized>(
        &self,
        term: &str,
        start: i64,
        limit: i64,
        renderer: &mut R,
    ) -> Result<usize> {
        let request = self.client.configure(term, start, limit)?;
        tracing::info!(
            "Searching '{}' (start={}, limit={})",
            request.term(),
            request.start(),
            request.limit()
        );

        let results = self.client.execute(&request).await?;
        let emitted = display(&results, &mut *renderer, self.augmenter.as_ref()).await?;
        tracing::debug!("Rendered {} record(s)", emitted);

        Ok(emitted)
    }

    /// Like `run`, but failures are also shown to the user through the
    /// renderer before being returned.
    pub async fn scrape<R: Renderer + ?Sized>(
        &self,
        term: &str,
        start: i64,
        limit: i64,
        renderer: &mut R,
    ) -> Result<usize> {
        match self.run(term, start, limit, &mut *renderer).await {
            Ok(emitted) => Ok(emitted),
            Err(e) => {
                tracing::error!(
                    "Scrape failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                renderer.error(&e.user_friendly_message())?;
                Err(e)
            }
        }
    }
}
