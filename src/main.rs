use clap::Parser;
use encore_site::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_site=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            encore_site::cli::init::run(path, name).await?;
        }
        Some(Commands::Serve { host, port }) => {
            encore_site::cli::serve::run(&cli.config, host, port).await?;
        }
        Some(Commands::Gallery { slug, json }) => {
            encore_site::cli::gallery::run(&cli.config, &slug, json).await?;
        }
        Some(Commands::Doctor) => {
            encore_site::cli::doctor::run(&cli.config).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
