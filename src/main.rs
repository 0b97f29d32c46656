use autoslug::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autoslug=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            autoslug::cli::serve::run(&cli.config, &host, port).await?;
        }
        Some(Commands::Migrate) => {
            autoslug::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Rebuild { post_type }) => {
            autoslug::cli::rebuild::run(&cli.config, &post_type).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
