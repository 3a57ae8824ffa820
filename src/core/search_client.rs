use crate::core::feed::parse_feed;
use crate::domain::model::{ResultSet, SearchRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScraperError};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, validate_range};
use reqwest::Client;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://export.arxiv.org/api/query";
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

pub struct SearchClient {
    endpoint: String,
    client: Client,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = config.user_agent() {
            builder = builder.user_agent(agent.to_string());
        }

        Ok(Self {
            endpoint: config.endpoint().to_string(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates the three user inputs. Nothing is sent on failure.
    pub fn configure(&self, term: &str, start: i64, limit: i64) -> Result<SearchRequest> {
        validate_non_empty_string("term", term)?;
        validate_non_negative("start", start)?;
        validate_range("limit", limit, MIN_LIMIT, MAX_LIMIT)?;

        let start = u32::try_from(start)
            .map_err(|_| ScraperError::validation("start", start, "Value is too large"))?;

        Ok(SearchRequest::new(term.trim().to_string(), start, limit as u32))
    }

    pub fn query_url(&self, request: &SearchRequest) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| ScraperError::Config {
            field: "source.endpoint".to_string(),
            message: format!("Invalid endpoint URL: {}", e),
        })?;

        url.query_pairs_mut()
            .append_pair("search_query", &format!("ti:{}", request.term()))
            .append_pair("start", &request.start().to_string())
            .append_pair("max_results", &request.limit().to_string());

        Ok(url)
    }

    /// One GET, no retry. A body that is not a readable feed becomes an
    /// empty result set.
    pub async fn execute(&self, request: &SearchRequest) -> Result<ResultSet> {
        let url = self.query_url(request)?;
        tracing::debug!("Making search request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            return Err(ScraperError::Fetch {
                message: format!("Search endpoint returned {}", status),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;

        let entries = match parse_feed(&body) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("{}; treating response as zero results", e);
                return Ok(ResultSet::empty());
            }
        };

        let results = ResultSet::from_feed(entries, request.limit());
        tracing::info!(
            "Found {} result(s) for '{}'",
            results.len(),
            request.term()
        );
        Ok(results)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
