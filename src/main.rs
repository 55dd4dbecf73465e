use clap::Parser;
use roadmap::cli::{run, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON result, so logs go to stderr.
    let default_level = match (&cli.command, cli.debug) {
        (_, true) => "debug",
        (Command::Serve(_), false) => "info",
        (Command::Search(_), false) => "warn",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
    tracing::debug!("roadmap starting");

    run(cli).await
}
