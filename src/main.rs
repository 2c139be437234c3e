//! CyberBurst - game server entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use cyber_burst::{AppState, ChannelBroadcaster, GameEngine, ServerConfig, router, spawn_ticker};
use cyber_burst_rules::{RulesetKind, Session, judge};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            ruleset,
        } => run_server(config, host, port, ruleset).await,
        Command::Check {
            ruleset,
            target,
            word,
        } => run_check(ruleset, target, &word),
    }
}

/// Run the game server until Ctrl+C.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_server(
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    ruleset: Option<RulesetKind>,
) -> Result<()> {
    let mut config = ServerConfig::load_or_default(&config_path)?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(ruleset) = ruleset {
        config = config.with_ruleset(ruleset);
    }
    config.validate()?;

    let session = Session::new(config.ruleset().build(), config.session_settings())?;
    let updates = ChannelBroadcaster::new(*config.broadcast_capacity());
    let engine = Arc::new(GameEngine::new(session, Arc::new(updates.clone())));
    let ticker = spawn_ticker(Arc::clone(&engine), config.tick_interval());

    let app = router(AppState::new(engine, updates));
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!(
        ruleset = %config.ruleset(),
        "✅ Server ready at http://{}:{}/",
        config.host(),
        config.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await?;

    ticker.abort();
    Ok(())
}

/// Print how a ruleset judges a single word.
#[instrument]
fn run_check(ruleset: RulesetKind, target: Option<char>, word: &str) -> Result<()> {
    let rules = ruleset.build();
    let target = match target {
        Some(c) => c,
        None => rules
            .extract_target_char(rules.initial_word())
            .context("Ruleset has no opening target character")?,
    };
    let judgement = judge(rules.as_ref(), target, word);
    println!("[{ruleset}] target '{target}': {judgement}");
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cyber_burst=debug,cyber_burst_rules=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
