use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hnreader::app::AppContext;
use hnreader::cli::{commands, Cli, Commands};
use hnreader::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered page
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Render { fragments, output } => {
            commands::render(&ctx, &fragments, output).await?;
        }
        Commands::Browse { output, open } => {
            commands::browse(&ctx, output, open).await?;
        }
        Commands::Config => {
            commands::show_config(&ctx, cli.config.as_deref())?;
        }
    }

    Ok(())
}
