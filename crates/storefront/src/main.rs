mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Recommend {
            name,
            catalog,
            top_n,
            json,
        } => commands::recommend::run(&ctx, &name, catalog.as_deref(), top_n, json),
        Commands::Trending {
            catalog,
            limit,
            json,
        } => commands::trending::run(&ctx, catalog.as_deref(), limit, json),
        Commands::Inspect { catalog } => commands::inspect::run(&ctx, catalog.as_deref()),
        Commands::Export { catalog, out } => commands::export::run(&ctx, catalog.as_deref(), &out),
        Commands::Version => commands::version::run(),
    }
}
