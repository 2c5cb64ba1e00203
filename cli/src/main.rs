//! CLI entrypoint for Tribunal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tribunal_application::{
    JudgeService, ProviderPool, RunAllAndJudgeUseCase, RunSingleUseCase, SessionManager,
};
use tribunal_domain::Provider;
use tribunal_infrastructure::{ConfigLoader, Credentials, HttpProviderGateway, JsonHistoryStore};
use tribunal_presentation::{ChatRepl, Cli, ConsoleFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // The one fatal startup condition: incomplete credentials
    let credentials = Credentials::from_env()?;

    info!("Starting Tribunal");

    // === Dependency Injection ===
    let gateway = Arc::new(HttpProviderGateway::new(credentials, config.models.clone()));
    let store: Arc<JsonHistoryStore> = Arc::new(JsonHistoryStore::new(config.history.log_path));
    let pool = Arc::new(ProviderPool::new(gateway.clone()));
    let judge = JudgeService::new(gateway);

    let run_all = RunAllAndJudgeUseCase::new(pool.clone(), judge, store.clone());
    let run_single = RunSingleUseCase::new(pool, store.clone());
    let session = SessionManager::new(store);

    // One-shot mode
    if !cli.chat && let Some(prompt) = cli.prompt {
        match cli.agent {
            Some(agent_str) => {
                let agent: Provider = agent_str
                    .parse()
                    .context("Unknown provider for --agent (claude, gemini, or openai)")?;
                let outcome = run_single.execute(agent, &prompt).await;
                if cli.quiet {
                    println!("{}", outcome.reply);
                } else {
                    println!("{}", ConsoleFormatter::format_reply(agent, &outcome.reply));
                }
            }
            None => {
                let outcome = run_all.execute(&prompt).await;
                if cli.quiet {
                    println!("{}", outcome.judge.best_text);
                } else {
                    println!("{}", ConsoleFormatter::format_answers(&outcome.answers));
                    println!("{}", ConsoleFormatter::format_judge(&outcome.judge));
                }
            }
        }
        return Ok(());
    }

    // Chat mode
    let mut repl = ChatRepl::new(run_all, run_single, session);
    repl.run().await?;

    Ok(())
}
