pub mod migrate;
pub mod rebuild;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autoslug")]
#[command(version)]
#[command(about = "Keeps content slugs in sync with titles", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "autoslug.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    Migrate,
    Rebuild {
        /// Content type to rebuild, or "any" for everything
        #[arg(long, default_value = "any")]
        post_type: String,
    },
}
