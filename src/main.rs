use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// OpenType/TrueType font whose metrics decide word widths.
    #[arg(global = true, short, long, default_value = "data/font.otf")]
    font: PathBuf,

    /// Word list, one candidate per line.
    #[arg(global = true, short, long, default_value = "data/words.txt")]
    words: PathBuf,

    /// Persisted width cache. May be overwritten.
    #[arg(global = true, short, long, default_value = "data/cache.json")]
    cache: PathBuf,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select words whose width fits the target band.
    Pick(cmd::pick::PickArgs),
    /// Rebuild the width cache without selecting anything.
    Cache(cmd::cache::CacheArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Pick(args) => cmd::pick::run(args, &cli.font, &cli.words, &cli.cache),
        Commands::Cache(args) => cmd::cache::run(args, &cli.font, &cli.words, &cli.cache),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
