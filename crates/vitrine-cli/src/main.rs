//! Vitrine: dev server that publishes a fresh procedural preview every UTC day

mod env;
mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use vitrine_core::config::PREVIEW_FILE;
use vitrine_core::{scheduler, DailyOrchestrator, DailyOutcome, PreviewConfig};

use crate::server::PreviewServer;

#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about = "Daily procedural preview dev server")]
struct Args {
    /// Directory to serve; `.env` files are read from its parent
    #[arg(long, default_value = "public")]
    root: PathBuf,

    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Generate today's preview and exit
    #[arg(long)]
    generate_once: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn log_outcome(outcome: &DailyOutcome) {
    match outcome {
        DailyOutcome::Disabled => info!("Preview generation is disabled"),
        DailyOutcome::UpToDate => info!("Preview already up to date for today"),
        DailyOutcome::Generated {
            source,
            title,
            html_changed,
            retries,
            ..
        } => info!(
            source = %source,
            retries,
            changed = html_changed,
            "Generated preview · {}",
            title
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let root = std::fs::canonicalize(&args.root)
        .with_context(|| format!("Root directory not found: {}", args.root.display()))?;
    if let Some(parent) = root.parent() {
        let applied = env::load_env_files(parent);
        if !applied.is_empty() {
            info!("Loaded {} variable(s) from env files", applied.len());
        }
    }

    let mut config = PreviewConfig::from_env(&root);
    if let Some(port) = args.port {
        config.port = port;
    }
    // A one-shot run is an explicit request, so the env switch does not apply
    if args.generate_once {
        config.enabled = true;
    }

    let orchestrator = Arc::new(DailyOrchestrator::from_config(config));

    if args.generate_once {
        let outcome = orchestrator
            .run_today()
            .await
            .context("Preview generation failed")?;
        log_outcome(&outcome);
        return Ok(());
    }

    let config = orchestrator.config().clone();
    if config.enabled {
        match orchestrator.run_today().await {
            Ok(outcome) => log_outcome(&outcome),
            Err(e) => error!("Startup preview generation failed: {:#}", e),
        }
        tokio::spawn(scheduler::run_daily_loop(Arc::clone(&orchestrator)));
    }

    let http = server::bind(config.port)?;
    let base = format!("http://localhost:{}", config.port);
    info!("Dev server running");
    info!("  Local:    {}/", base);
    info!("  Index:    {}/index.html", base);
    info!("  Previews: {}/src/previews/", base);
    info!("  Daily:    {}/{}", base, PREVIEW_FILE);
    if config.enabled {
        info!("  Daily generation: ON");
        if let Some(remote) = config.remote.as_ref().filter(|_| orchestrator.remote_enabled()) {
            info!("  Remote provider: ON ({})", remote.model);
        } else {
            info!("  Remote provider: OFF (local generator)");
        }
    } else {
        warn!("  Daily generation: OFF (serving static files)");
    }

    let preview_server = PreviewServer::new(orchestrator, tokio::runtime::Handle::current());
    tokio::task::spawn_blocking(move || preview_server.run(http))
        .await
        .context("Server thread panicked")?;

    Ok(())
}
