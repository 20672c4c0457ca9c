mod cli;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use timekeeper_ai::{Dispatcher, IntentRouter, OllamaClient, OllamaConfig};
use timekeeper_common::TimekeeperError;
use timekeeper_config::schema::{LogLevel, TimekeeperConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Used until the config file names a level, and whenever a directive is bad.
const DEFAULT_DIRECTIVE: &str = "timekeeper=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Load environment variables from `./.env` (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// `RUST_LOG` plus `directive`, or plus [`DEFAULT_DIRECTIVE`] if it does not parse.
fn build_filter(directive: &str) -> EnvFilter {
    let directive = if EnvFilter::builder().parse(directive).is_ok() {
        directive
    } else {
        DEFAULT_DIRECTIVE
    };
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    EnvFilter::builder().parse_lossy(format!("{env},{directive}"))
}

/// Install the stderr log subscriber with a filter that can be swapped later.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Narrow or widen logging to the level from the config file.
fn apply_config_level(handle: &FilterHandle, level: LogLevel) {
    let directive = format!("timekeeper={}", level.as_str());
    if let Err(e) = handle.reload(build_filter(&directive)) {
        tracing::warn!("Could not apply log level {directive}: {e}");
    }
}

fn build_client(config: &TimekeeperConfig) -> timekeeper_common::Result<OllamaClient> {
    let model = &config.model;
    let ollama = OllamaConfig::new()
        .with_base_url(&model.base_url)
        .with_model(&model.name)
        .with_temperature(model.temperature)
        .with_timeouts(
            Duration::from_secs(model.connect_timeout_secs.into()),
            Duration::from_secs(model.request_timeout_secs.into()),
        );
    OllamaClient::new(ollama).map_err(|e| TimekeeperError::Ai(e.to_string()))
}

async fn run(config: TimekeeperConfig) -> timekeeper_common::Result<()> {
    let client = build_client(&config)?;
    if !client.is_available().await {
        tracing::warn!(
            base_url = %config.model.base_url,
            "Model service is not reachable; general questions will fail until it is"
        );
    }

    let dispatcher = Arc::new(
        Dispatcher::new(Arc::new(client))
            .with_router(IntentRouter::new(&config.router.time_keywords)),
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(dispatcher, &config.router.exit_words, stdin, &mut stdout).await
}

fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    // --log-level beats the config file, so only reload when it is absent.
    let log_handle = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE));
    tracing::info!("Timekeeper v{} starting...", env!("CARGO_PKG_VERSION"));

    let loaded = timekeeper_config::load_config(args.config.as_deref());
    if args.log_level.is_none() {
        if let Ok(config) = &loaded {
            apply_config_level(&log_handle, config.logging.level);
        }
    }

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            let mut config = TimekeeperConfig::default();
            timekeeper_config::apply_ollama_host(
                &mut config,
                std::env::var(timekeeper_config::OLLAMA_HOST_ENV).ok(),
            );
            config
        }
    };
    if let Some(model) = args.model {
        config.model.name = model;
    }
    tracing::debug!("Effective config: {}", timekeeper_config::config_to_json(&config));
    tracing::info!(model = %config.model.name, base_url = %config.model.base_url, "Config loaded");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(config));
    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Session ended: {e}");
            ExitCode::FAILURE
        }
    }
}
