// src/main.rs

//! arXiv Digest CLI
//!
//! Queries the arXiv catalog for newly submitted preprints, skips
//! everything the store has seen before, and writes a dated HTML digest.

use clap::{Parser, Subcommand};

use arxiv_digest::error::Result;
use arxiv_digest::models::Config;
use arxiv_digest::pipeline::run_digest;

#[derive(Parser, Debug)]
#[command(
    name = "arxiv-digest",
    version,
    about = "Daily HTML digests of new arXiv preprints"
)]

/// CLI Arguments
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "digest.toml")]
    config: String,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch new articles and write today's digest
    Run {
        /// Override the output directory
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate configuration
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_or_default(&cli.config);

    let level = if cli.quiet {
        "error"
    } else {
        config.logging.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Run { output } => {
            if let Some(dir) = output {
                config.output.dir = dir;
            }
            config.validate()?;
            run_digest(&config).await?;
        }
        Command::Validate => {
            config.validate()?;
            log::info!("Configuration OK");
        }
    }

    Ok(())
}
