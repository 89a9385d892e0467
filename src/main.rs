//! Fast Translate API Server
//!
//! Run with: cargo run --bin fast-translate
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the default locations
//! searched by [`Config::load_default`]) with environment overrides:
//! - `FAST_TRANSLATE_HOST`, `FAST_TRANSLATE_PORT` / `PORT`
//! - `FAST_TRANSLATE_STATIC_DIR`: built UI bundle served at `/`
//! - `FAST_TRANSLATE_STORE_PATH`: JSON file persisting dictionaries and settings
//! - `GEMINI_API_KEY`: initial Gemini key
//! - `GOOGLE_CLOUD_ACCESS_TOKEN`: enables Cloud Translation
//! - `RUST_LOG`: Log filter (default: fast_translate=info,tower_http=debug)

use anyhow::Context;
use clap::{Parser, Subcommand};
use fast_translate::api::{serve, AppState};
use fast_translate::config::{generate_default_config, Config};
use fast_translate::dictionary::DictionaryStore;
use fast_translate::translation::{
    CloudTranslateClient, GeminiClient, MachineTranslator, TranslationEngine,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fast-translate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "English to Bengali translation server with replacement dictionaries")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a default config file and exit
    PrintConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(Command::PrintConfig) = args.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Fast Translate server v{}", env!("CARGO_PKG_VERSION"));

    // Dictionary store
    let default_key = config.translation.gemini_api_key.clone();
    let store = match &config.storage.path {
        Some(path) => {
            tracing::info!("Store file: {}", path);
            DictionaryStore::open(path, default_key)
                .await
                .with_context(|| format!("opening store at {}", path))?
        }
        None => {
            tracing::info!("No store path configured, dictionaries are kept in memory");
            DictionaryStore::new(default_key)
        }
    };

    // Translation providers
    let gemini = Arc::new(GeminiClient::new(config.translation.gemini())?);

    let translator: Option<Arc<dyn MachineTranslator>> = match config.translation.cloud() {
        Some(cloud) => {
            tracing::info!("Cloud Translation enabled for project {}", cloud.project_id);
            Some(Arc::new(CloudTranslateClient::new(cloud)?))
        }
        None => {
            tracing::warn!(
                "Cloud Translation disabled (set GOOGLE_CLOUD_ACCESS_TOKEN to enable)"
            );
            None
        }
    };

    let engine = Arc::new(TranslationEngine::new(gemini, translator));

    let api_config = config.api();
    let state = AppState::new(Arc::new(store), engine, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Fast Translate server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "fast_translate={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
