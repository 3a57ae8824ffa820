use arxiv_scraper::utils::error::ErrorSeverity;
use arxiv_scraper::utils::{logger, validation::Validate};
use arxiv_scraper::{
    CliConfig, ExplanationAugmenter, HttpTextGenerator, JsonRenderer, Renderer, Scraper,
    ScraperError, SearchClient, SearchDefaults, Session, TextGenerator, TextRenderer, TomlConfig,
};
use clap::Parser;
use std::io::{self, BufWriter};
use std::sync::Arc;

fn exit_code(error: &ScraperError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &ScraperError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
    std::process::exit(exit_code(error).max(1));
}

fn load_config(cli: &CliConfig) -> Result<TomlConfig, ScraperError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn build_scraper(config: &TomlConfig) -> Result<Scraper, ScraperError> {
    let scraper = Scraper::new(SearchClient::from_config(config)?);
    if !config.generator.enabled {
        return Ok(scraper);
    }

    // Built once and shared by every explanation for the rest of the process.
    let generator: Arc<dyn TextGenerator> = Arc::new(HttpTextGenerator::new(
        config.generator.endpoint.clone(),
        config.generator.api_token().map(str::to_string),
    ));
    let augmenter = ExplanationAugmenter::new(generator).with_limits(
        config.generator.max_length,
        config.generator.num_return_sequences,
    );

    Ok(scraper.with_augmenter(augmenter))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_format == "json" {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = load_config(&cli).unwrap_or_else(|e| fail(&e));
    let scraper = build_scraper(&config).unwrap_or_else(|e| fail(&e));

    tracing::info!(
        "🚀 Using search endpoint {} (explanations: {})",
        scraper.client().endpoint(),
        if scraper.explains() { "on" } else { "off" }
    );

    let stdout = BufWriter::new(io::stdout().lock());
    let mut renderer: Box<dyn Renderer> = if config.is_json_output() {
        Box::new(JsonRenderer::new(stdout))
    } else {
        Box::new(TextRenderer::with_separator_width(
            stdout,
            config.display.separator_width,
        ))
    };

    if cli.is_interactive() {
        let defaults = SearchDefaults {
            start: cli.start_or(&config),
            limit: cli.limit_or(&config),
        };
        let mut session = Session::new(&scraper, io::stdin().lock(), io::stderr(), defaults);
        if let Err(e) = session.run(renderer.as_mut()).await {
            fail(&e);
        }
        return Ok(());
    }

    let term = cli.term.clone().unwrap_or_default();
    if let Err(e) = scraper
        .scrape(&term, cli.start_or(&config), cli.limit_or(&config), renderer.as_mut())
        .await
    {
        // Already rendered; flush what was written before exiting.
        renderer.finish().ok();
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
