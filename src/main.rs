mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ini_cfg=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { file, ini } => cli::dump(&file, ini)?,
        Commands::Get { file, path } => cli::get(&file, &path)?,
        Commands::Check { files } => cli::check(&files)?,
        Commands::Convert { input, output } => cli::convert(&input, &output)?,
    }

    Ok(())
}
