use crate::config::toml_config::TomlConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "arxiv-scraper")]
#[command(about = "Search arXiv paper titles and list the newest results first")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Title keyword to search for; without it the interactive prompt starts
    #[arg(short, long)]
    pub term: Option<String>,

    /// Starting index of the results
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Maximum number of results (1-100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Add a generated explanation to every abstract
    #[arg(short, long)]
    pub explain: bool,

    /// Override the search endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the text generation endpoint
    #[arg(long)]
    pub generator_endpoint: Option<String>,

    /// Request timeout for the search endpoint
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Prompt for searches until EOF or ":q"
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log format on stderr: text or json
    #[arg(long, default_value = "text")]
    pub log_format: String,
}

impl CliConfig {
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.term.is_none()
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
            tracing::info!("🔧 Search endpoint overridden to: {}", endpoint);
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
        if self.explain {
            config.generator.enabled = true;
        }
        if let Some(endpoint) = &self.generator_endpoint {
            config.generator.endpoint = endpoint.clone();
        }
        if let Some(format) = &self.format {
            config.display.format = format.clone();
        }
    }

    pub fn start_or(&self, config: &TomlConfig) -> i64 {
        self.start.unwrap_or(config.search.default_start)
    }

    pub fn limit_or(&self, config: &TomlConfig) -> i64 {
        self.limit.unwrap_or(config.search.default_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_flags() {
        let cli = CliConfig::parse_from([
            "arxiv-scraper",
            "--term",
            "quantum computing",
            "--start",
            "0",
            "--limit",
            "2",
        ]);

        assert!(!cli.is_interactive());
        assert_eq!(cli.term.as_deref(), Some("quantum computing"));
        assert_eq!(cli.limit, Some(2));
    }

    #[test]
    fn test_negative_start_reaches_validation() {
        let cli = CliConfig::parse_from(["arxiv-scraper", "-t", "graphs", "-s", "-3"]);
        assert_eq!(cli.start, Some(-3));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let cli = CliConfig::parse_from([
            "arxiv-scraper",
            "--explain",
            "--endpoint",
            "http://localhost:9999/api/query",
            "--format",
            "json",
        ]);
        let mut config = TomlConfig::default();
        cli.apply_overrides(&mut config);

        assert!(cli.is_interactive());
        assert!(config.generator.enabled);
        assert_eq!(config.source.endpoint, "http://localhost:9999/api/query");
        assert!(config.is_json_output());
        assert_eq!(cli.limit_or(&config), 10);
    }
}
