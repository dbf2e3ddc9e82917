use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use frontpage::app::AppContext;
use frontpage::cli::{commands, Cli, Commands};
use frontpage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Top {
            count,
            all,
            hide,
            json,
        } => {
            commands::top(&ctx, count, all, &hide, json).await?;
        }
        Commands::Show { id, json } => {
            commands::show(&ctx, &id, json).await?;
        }
        Commands::Config => {
            commands::show_config(&ctx, &config_path)?;
        }
    }

    Ok(())
}
