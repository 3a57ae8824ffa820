use crate::domain::ports::TextGenerator;
use crate::utils::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    num_return_sequences: u32,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    generated_text: String,
}

/// Text generation over a hosted inference endpoint that takes
/// `{"inputs", "parameters"}` and answers `[{"generated_text"}]`.
pub struct HttpTextGenerator {
    endpoint: String,
    api_token: Option<String>,
    client: Client,
}

impl HttpTextGenerator {
    pub fn new(endpoint: impl Into<String>, api_token: Option<String>) -> Self {
        let endpoint = endpoint.into();
        tracing::info!("Initialized text generator at {}", endpoint);

        Self {
            endpoint,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        max_length: u32,
        num_return_sequences: u32,
    ) -> Result<Vec<String>> {
        let body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_length,
                num_return_sequences,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| ScraperError::Generation {
            message: format!("request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ScraperError::Generation {
                message: format!("endpoint returned {}: {}", status, detail.trim()),
            });
        }

        let sequences: Vec<GeneratedSequence> =
            response.json().await.map_err(|e| ScraperError::Generation {
                message: format!("unexpected response body: {}", e),
            })?;

        Ok(sequences.into_iter().map(|s| s.generated_text).collect())
    }
}
