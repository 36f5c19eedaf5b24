//! CLI entrypoint for punchline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use punchline_application::{
    BehaviorConfig, ChatSession, ChatSettings, ResponseGenerator, SessionState, SubmitOutcome,
};
use punchline_domain::Model;
use punchline_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, LocalDocumentExtractor, MistralGateway,
    TomlSecretStore,
};
use punchline_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressMode, ReplConfig, read_upload,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter for a `-v` count; `RUST_LOG` takes precedence.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing: stderr, plus a daily-rolled file when `log_dir` is set.
///
/// The returned guard must live until exit so the file writer is flushed.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "punchline.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn resolve_model(cli: &Cli, config: &FileConfig) -> Result<Model> {
    match cli.model.as_deref() {
        Some(name) => name
            .parse()
            .map_err(|e| anyhow!("Invalid --model: {}", e)),
        None => config.model().context("Invalid [chat] model"),
    }
}

/// Fresh per-session state sized by `[session] history_limit`
fn session_state(config: &FileConfig) -> Result<SessionState> {
    SessionState::new(config.session.history_limit).context("Invalid [session] history_limit")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    let output_config = OutputConfig {
        color: config.output.color && !cli.no_color,
    };
    output_config.apply();

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.log_dir.clone());
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref());

    info!("Starting punchline");

    let model = resolve_model(&cli, &config)?;
    let settings = ChatSettings::default()
        .with_model(model)
        .with_persona(config.chat.persona.clone());
    let state = session_state(&config)?;
    info!(
        model = %settings.model,
        history_limit = state.history().limit(),
        "Chat settings"
    );

    // === Dependency Injection ===
    let secrets = Arc::new(TomlSecretStore::new(
        config.provider.api_key_name.clone(),
        config.provider.secrets_file.clone(),
    ));
    let timeout = config.provider.timeout_seconds.map(Duration::from_secs);
    let gateway = Arc::new(
        MistralGateway::new(&config.provider.base_url, timeout, secrets)
            .context("Failed to create HTTP client")?,
    );

    let generator = ResponseGenerator::new(gateway, settings.clone())
        .with_behavior(BehaviorConfig::from_timeout_seconds(
            config.provider.timeout_seconds,
        ));
    let extractor = Arc::new(LocalDocumentExtractor::new(config.session.preview_rows));

    let mut session = ChatSession::new(generator, extractor, state);
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation transcript: {}", logger.path().display());
                session = session.with_logger(Arc::new(logger));
            }
            None => warn!("Continuing without a conversation transcript"),
        }
    }

    if let Some(path) = &cli.file {
        let result = read_upload(path).and_then(|file| session.upload(file));
        match result {
            Ok(outcome) => print!("{}", ConsoleFormatter::upload(&outcome)),
            Err(e) if cli.chat => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
            Err(e) => return Err(e.into()),
        }
    }

    let show_progress = config.repl.show_progress && !cli.quiet;

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress,
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = ChatRepl::new(session)
            .with_progress(ProgressMode::detect(repl_config.show_progress))
            .with_history_path(repl_config.history_path());

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --chat for interactive mode.");
    };

    let progress = ProgressMode::detect(show_progress).notifier();

    match session.submit(question, progress.as_ref()).await? {
        SubmitOutcome::Answered { reply } => println!("{}", ConsoleFormatter::reply(&reply)),
        SubmitOutcome::Ignored => bail!("Question is empty."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("punchline").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(9), "trace");
    }

    #[test]
    fn test_model_flag_overrides_config() {
        let config = FileConfig::default();
        assert_eq!(
            resolve_model(&cli(&["-m", "open-mistral-nemo", "q"]), &config).unwrap(),
            Model::OpenMistralNemo
        );
        assert_eq!(
            resolve_model(&cli(&["q"]), &config).unwrap(),
            Model::MistralLarge
        );
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let config = load_config(&cli(&["--no-config", "q"])).unwrap();
        assert_eq!(config.session.history_limit, 10);
        assert_eq!(config.provider.api_key_name, "mistral_key");
    }

    #[test]
    fn test_session_state_uses_configured_limit() {
        let mut config = FileConfig::default();
        config.session.history_limit = 4;
        assert_eq!(session_state(&config).unwrap().history().limit(), 4);

        config.session.history_limit = 1;
        assert!(session_state(&config).is_err());
    }
}
