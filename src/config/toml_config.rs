use crate::core::augment::{DEFAULT_MAX_LENGTH, DEFAULT_NUM_RETURN_SEQUENCES};
use crate::core::search_client::{DEFAULT_ENDPOINT, MAX_LIMIT, MIN_LIMIT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScraperError};
use crate::utils::validation::{
    validate_non_negative, validate_one_of, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const DEFAULT_GENERATOR_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/gpt2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub search: SearchConfig,
    pub generator: GeneratorConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_start: i64,
    pub default_limit: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_start: 0,
            default_limit: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub api_token: Option<String>,
    pub max_length: u32,
    pub num_return_sequences: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_GENERATOR_ENDPOINT.to_string(),
            api_token: None,
            max_length: DEFAULT_MAX_LENGTH,
            num_return_sequences: DEFAULT_NUM_RETURN_SEQUENCES,
        }
    }
}

impl GeneratorConfig {
    /// Blank tokens and `${VAR}` placeholders left by an unset variable count as absent.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && !(t.starts_with("${") && t.ends_with('}')))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: String,
    pub separator_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            separator_width: 60,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScraperError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScraperError::Config {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, 3600)?;
        }

        validate_non_negative("search.default_start", self.search.default_start)?;
        validate_range("search.default_limit", self.search.default_limit, MIN_LIMIT, MAX_LIMIT)?;

        if self.generator.enabled {
            validate_url("generator.endpoint", &self.generator.endpoint)?;
            validate_range("generator.max_length", self.generator.max_length, 1, 4096)?;
            validate_range(
                "generator.num_return_sequences",
                self.generator.num_return_sequences,
                1,
                16,
            )?;
        }

        validate_one_of("display.format", &self.display.format, &OUTPUT_FORMATS)?;
        validate_range("display.separator_width", self.display.separator_width, 1, 200)?;

        Ok(())
    }

    pub fn is_json_output(&self) -> bool {
        self.display.format == "json"
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.source.user_agent.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
