//! chat-index CLI application
//!
//! Command-line interface for the chat-index library.

use chat_index::{build_database, Config, SeedData};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chat-index")]
#[command(about = "Build a SQLite search index over chat-session transcripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the search database from scratch (deletes any existing file)
    Build {
        /// Output database file
        #[arg(short, long, default_value = "search.db")]
        output: PathBuf,

        /// JSON seed file; omit to use the built-in session data
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { output, seed } => {
            build_command(output, seed)?;
        }
    }

    Ok(())
}

fn build_command(
    output: PathBuf,
    seed_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::new(&output);
    if let Some(path) = seed_file {
        config = config.with_seed_file(path);
    }

    let seed = match &config.seed_file {
        Some(path) => {
            println!("📄 Loading seed data from {}", path.display());
            SeedData::from_json_file(path)?
        }
        None => SeedData::builtin(),
    };

    let report = build_database(&config, &seed)?;

    println!("✅ Created {} with optimized indexes", report.db_path.display());
    println!("   📊 Sessions: {}", report.session_count);
    println!("   🏷️  Topics: {}", report.topic_count);
    println!("   🔑 Keywords: {}", report.keyword_count);
    println!("   📋 Tables: {}", report.tables.join(", "));
    println!("   ⚡ Indexes: {}", report.indexes.join(", "));

    Ok(())
}
