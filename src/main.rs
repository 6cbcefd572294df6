mod prompt;

use anyhow::{Context, Result};
use braacket_stats::{Cache, match_candidates, player_report};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "braacket-stats")]
#[command(about = "Look up player records from a pre-built braacket cache", long_about = None)]
struct Cli {
    /// Path to the cache file
    #[arg(long, default_value = "cache.json")]
    cache: PathBuf,

    /// Directory of character images
    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// Maximum suggestions shown while typing
    #[arg(long, default_value_t = 5)]
    limit: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the names matching a query
    Suggest { query: String },

    /// Show one player's record
    Show {
        /// Display name, matched case-insensitively
        name: Option<String>,

        /// Look up by ranking position instead of name
        #[arg(long, conflicts_with = "name")]
        rank: Option<u32>,
    },

    /// Print every display name in the cache
    Names,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cache = Cache::load(&cli.cache)
        .with_context(|| format!("cannot start without cache {}", cli.cache.display()))?;

    match cli.command {
        Some(Commands::Suggest { query }) => {
            let names = cache.names();
            for name in match_candidates(&query, &names) {
                println!("{name}");
            }
        }
        Some(Commands::Show { name, rank }) => {
            let record = match (&name, rank) {
                (_, Some(rank)) => cache.find_by_rank(rank),
                (Some(name), None) => cache.find_by_name(name),
                (None, None) => anyhow::bail!("provide a player name or --rank"),
            };
            match record {
                Some(record) => println!("{}", player_report(record, &cli.images)),
                None => println!("Player not found."),
            }
        }
        Some(Commands::Names) => {
            for name in cache.names() {
                println!("{name}");
            }
        }
        None => prompt::run(&cache, &cli.images, cli.limit)?,
    }

    Ok(())
}
