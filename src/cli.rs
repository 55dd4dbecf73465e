//! Command-line surface: argument types and the dispatch behind them.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roadmap_core::config::Config;
use roadmap_core::{FilterSpec, QueryEngine, RecordSource, SearchResult};
use roadmap_feeds::{FileFeed, HttpFeed};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roadmap", about = "Search the Microsoft 365 public roadmap")]
pub struct Cli {
    /// Config file (default: ~/.config/roadmap/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one search and print the result as JSON.
    Search(SearchArgs),
    /// Serve the search tool over HTTP.
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against title and description.
    #[arg(long)]
    pub query: Option<String>,
    /// Product tag, partial match.
    #[arg(long)]
    pub product: Option<String>,
    /// Exact status (In development, Rolling out, Launched).
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub cloud_instance: Option<String>,
    /// Fetch a single feature by roadmap ID; other filters are ignored.
    #[arg(long)]
    pub feature_id: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub added_within_days: Option<i64>,
    #[arg(long)]
    pub release_phase: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    /// e.g. "December 2026".
    #[arg(long)]
    pub rollout_date: Option<String>,
    /// e.g. "July 2026".
    #[arg(long)]
    pub preview_date: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub modified_within_days: Option<i64>,
    /// Add per-category counts over the matched set.
    #[arg(long)]
    pub include_facets: bool,
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
    /// Read a saved feed snapshot instead of calling the upstream API.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl SearchArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            query: self.query.clone(),
            product: self.product.clone(),
            status: self.status.clone(),
            cloud_instance: self.cloud_instance.clone(),
            feature_id: self.feature_id.clone(),
            added_within_days: self.added_within_days,
            release_phase: self.release_phase.clone(),
            platform: self.platform.clone(),
            rollout_date: self.rollout_date.clone(),
            preview_date: self.preview_date.clone(),
            modified_within_days: self.modified_within_days,
            include_facets: self.include_facets,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host (default from config).
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port (default from config).
    #[arg(long)]
    pub port: Option<u16>,
    /// Serve a saved feed snapshot instead of the upstream API.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Search(args) => {
            let spec = args.filter_spec();
            let result = match &args.snapshot {
                Some(path) => search_once(FileFeed::new(path), &config, &spec).await?,
                None => search_once(HttpFeed::from_config(&config.feed)?, &config, &spec).await?,
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Serve(args) => {
            let mut config = config;
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            let addr = config.bind_addr();
            let limit = config.search.default_limit;
            match args.snapshot {
                Some(path) => {
                    let engine = QueryEngine::new(FileFeed::new(path)).with_default_limit(limit);
                    roadmap_server::serve(engine, &addr).await?;
                }
                None => {
                    let engine = QueryEngine::new(HttpFeed::from_config(&config.feed)?)
                        .with_default_limit(limit);
                    roadmap_server::serve(engine, &addr).await?;
                }
            }
        }
    }
    Ok(())
}

async fn search_once<S: RecordSource>(
    source: S,
    config: &Config,
    spec: &FilterSpec,
) -> anyhow::Result<SearchResult> {
    let engine = QueryEngine::new(source).with_default_limit(config.search.default_limit);
    engine.search(spec).await.context("roadmap search failed")
}
