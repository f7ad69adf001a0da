pub mod doctor;
pub mod gallery;
pub mod init;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encore")]
#[command(version)]
#[command(about = "Promotional site for a performing artist", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "encore.toml", env = "ENCORE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter encore.toml
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the site
    Serve {
        /// Defaults to server.host from the config
        #[arg(short = 'H', long, env = "ENCORE_HOST")]
        host: Option<String>,
        /// Defaults to server.port from the config
        #[arg(short, long, env = "ENCORE_PORT")]
        port: Option<u16>,
    },
    /// Print the aggregated media of one event gallery
    Gallery {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// Check configuration and media source credentials
    Doctor,
}
