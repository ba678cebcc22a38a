use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use folio_store::{InMemoryPageStore, InMemoryPortfolioStore, InMemoryTemplateStore, Latency};
use folio_workspace::{Builder, WorkspaceState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Simulated store latency in milliseconds (lower bound with --latency-max-ms)
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Upper bound of a random store latency in milliseconds
    #[arg(long)]
    pub latency_max_ms: Option<u64>,

    /// Random 200-500 ms store latency, like the hosted demo
    #[arg(long, conflicts_with_all = ["latency_ms", "latency_max_ms"])]
    pub demo_latency: bool,
}

pub fn serve(args: ServeArgs, cwd: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (config, latency) = resolve(&args, Config::load(cwd)?);
    let (host, port) = (config.host, config.port);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let builder = Builder::new(
        Arc::new(InMemoryPageStore::with_fixtures()?.with_latency(latency)),
        Arc::new(InMemoryPortfolioStore::with_fixtures()?.with_latency(latency)),
        Arc::new(InMemoryTemplateStore::with_fixtures()?.with_latency(latency)),
    );
    let state = Arc::new(WorkspaceState::new(builder));

    println!("{}", "🚀 Starting Folio builder API...".bright_blue().bold());
    println!("   Listening on {}", format!("http://{}", addr).cyan());
    if let Some(latency) = latency {
        println!("   Store latency: {:?}..={:?}", latency.min, latency.max);
    }
    println!();

    tokio::runtime::Runtime::new()?.block_on(folio_workspace::serve(addr, state))?;
    Ok(())
}

/// Merge command line flags over the loaded config
fn resolve(args: &ServeArgs, mut config: Config) -> (Config, Option<Latency>) {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.latency_ms.is_some() || args.latency_max_ms.is_some() {
        config.latency_ms = args.latency_ms;
        config.latency_max_ms = args.latency_max_ms;
    }

    let latency = if args.demo_latency {
        Some(Latency::demo())
    } else {
        config.latency()
    };
    (config, latency)
}
