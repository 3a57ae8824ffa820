use crate::core::scraper::Scraper;
use crate::domain::ports::Renderer;
use crate::utils::error::{Result, ScraperError};
use std::io::{BufRead, Write};

pub const QUIT_COMMAND: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDefaults {
    pub start: i64,
    pub limit: i64,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self { start: 0, limit: 10 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub searches: usize,
    pub failures: usize,
}

/// Blank input falls back to the default.
fn parse_number(field: &str, raw: &str, default: i64) -> Result<i64> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<i64>()
        .map_err(|_| ScraperError::validation(field, raw, "Value must be a whole number"))
}

/// Prompt loop: each submitted set of inputs is one independent scrape.
pub struct Session<'a, I: BufRead, P: Write> {
    scraper: &'a Scraper,
    input: I,
    prompt: P,
    defaults: SearchDefaults,
}

impl<'a, I: BufRead, P: Write> Session<'a, I, P> {
    pub fn new(scraper: &'a Scraper, input: I, prompt: P, defaults: SearchDefaults) -> Self {
        Self {
            scraper,
            input,
            prompt,
            defaults,
        }
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.prompt, "{}", question)?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Runs until EOF or `:q`. Only output failures end the loop early.
    pub async fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let Some(term) = self.ask("Enter the search term (:q to quit): ")? else {
                break;
            };
            if term == QUIT_COMMAND {
                break;
            }

            let start_question = format!(
                "Enter the starting index (default is {}): ",
                self.defaults.start
            );
            let Some(start_raw) = self.ask(&start_question)? else {
                break;
            };

            let limit_question = format!(
                "Enter the maximum number of results (default is {}): ",
                self.defaults.limit
            );
            let Some(limit_raw) = self.ask(&limit_question)? else {
                break;
            };

            let numbers = parse_number("start", &start_raw, self.defaults.start).and_then(
                |start| {
                    parse_number("limit", &limit_raw, self.defaults.limit)
                        .map(|limit| (start, limit))
                },
            );

            let outcome = match numbers {
                Ok((start, limit)) => {
                    self.scraper
                        .scrape(&term, start, limit, &mut *renderer)
                        .await
                }
                Err(e) => {
                    renderer.error(&e.user_friendly_message())?;
                    Err(e)
                }
            };

            match outcome {
                Ok(_) => summary.searches += 1,
                Err(ScraperError::Io(e)) => return Err(ScraperError::Io(e)),
                Err(e) => {
                    tracing::debug!("Search failed, waiting for the next one: {}", e);
                    summary.failures += 1;
                }
            }
        }

        tracing::info!(
            "Session ended after {} search(es), {} failed",
            summary.searches,
            summary.failures
        );
        Ok(summary)
    }
}
