//! Terminal front end for monster competitions.
mod app;
mod config;
mod input;
mod presentation;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use app::CliApp;
use arena_content::ConfigLoader;
use arena_core::{ArenaConfig, DecisionSource, SeededDecisions};
use config::{CliConfig, USAGE};
use input::PromptDecisions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = match CliConfig::from_env().apply_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error, {error}");
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let rules = match &config.rules_file {
        Some(path) => ConfigLoader::load(path)?,
        None => ArenaConfig::default(),
    };

    let decisions: Box<dyn DecisionSource> = if config.debug {
        tracing::info!("debug mode: every random outcome is asked on stdin");
        Box::new(PromptDecisions::stdio())
    } else {
        let seed = config.seed_or_now();
        tracing::info!(seed, "seeding decisions");
        Box::new(SeededDecisions::new(seed))
    };

    let mut app = CliApp::new(decisions, rules);
    let mut stdout = io::stdout().lock();

    if let Some(path) = &config.config_file
        && let Err(error) = app.load(path, &mut stdout)
    {
        eprintln!("Error, {error}");
        return Ok(ExitCode::FAILURE);
    }

    app.run(&mut io::stdin(), &mut stdout)?;
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr so narrative output on stdout stays clean.
///
/// The level comes from `RUST_LOG` and defaults to `warn`.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
