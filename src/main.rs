//! `choice-explorer <content> [state]`
//!
//! Loads content (JSON or YAML) and optional saved state, then prints the
//! rendered view as JSON. Logs go to stderr.

use std::env;
use std::error::Error;
use std::io;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use choice_explorer::adapters::{ContentFileLoader, UuidIdGenerator};
use choice_explorer::application::{ChoiceExplorer, ExplorerSettings};
use choice_explorer::config::{AppConfig, LoggingConfig};
use choice_explorer::ports::StatefulWidget;

const USAGE: &str = "usage: choice-explorer <content.json|content.yaml> [state.json]";

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let mut args = env::args().skip(1);
    let content_path = args.next().ok_or(USAGE)?;
    let state_path = args.next();

    let loader = ContentFileLoader::new();
    let content = loader.load_content(&content_path)?;

    let settings = ExplorerSettings::from(&config);
    let mut explorer = ChoiceExplorer::from_config(content, &settings, &UuidIdGenerator::new());

    if let Some(path) = state_path {
        let payload = loader.load_state(&path)?;
        explorer.restore_from_json(&payload);
    }
    explorer.on_animation_frame();

    info!(content = %content_path, "Rendering explorer");
    serde_json::to_writer_pretty(io::stdout().lock(), &explorer.render())?;
    println!();

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
