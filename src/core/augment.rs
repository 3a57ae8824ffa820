use crate::domain::ports::TextGenerator;
use crate::utils::error::{Result, ScraperError};
use std::sync::Arc;

pub const DEFAULT_MAX_LENGTH: u32 = 150;
pub const DEFAULT_NUM_RETURN_SEQUENCES: u32 = 1;

/// Turns an abstract into a generated explanation.
///
/// The generator is shared; building one can be expensive, so callers
/// construct it once and hand clones of the `Arc` around.
#[derive(Clone)]
pub struct ExplanationAugmenter {
    generator: Arc<dyn TextGenerator>,
    max_length: u32,
    num_return_sequences: u32,
}

impl ExplanationAugmenter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            max_length: DEFAULT_MAX_LENGTH,
            num_return_sequences: DEFAULT_NUM_RETURN_SEQUENCES,
        }
    }

    pub fn with_limits(mut self, max_length: u32, num_return_sequences: u32) -> Self {
        self.max_length = max_length;
        self.num_return_sequences = num_return_sequences;
        self
    }

    /// Returns the first generated sequence verbatim.
    pub async fn explain(&self, summary: &str) -> Result<String> {
        tracing::debug!(
            "Requesting explanation ({} chars, max_length={})",
            summary.len(),
            self.max_length
        );

        let mut sequences = self
            .generator
            .generate(summary, self.max_length, self.num_return_sequences)
            .await?;

        if sequences.is_empty() {
            return Err(ScraperError::Generation {
                message: "generator returned no sequences".to_string(),
            });
        }

        Ok(sequences.swap_remove(0))
    }
}
