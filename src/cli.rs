use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flixgate")]
#[command(author, version, about = "Streaming-reference decoder for Stremio-compatible addons")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a streaming reference and display its metadata
    Decode {
        /// Encoded reference (the player route's trailing path)
        #[arg(required = true)]
        reference: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the URL a player should open for a streaming reference
    Resolve {
        /// Encoded reference (the player route's trailing path)
        #[arg(required = true)]
        reference: String,

        /// Addon id (defaults to the stream's binge group prefix)
        #[arg(short, long)]
        addon: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a streaming reference from stream metadata JSON
    Encode {
        /// Stream object as JSON
        #[arg(required = true)]
        metadata: String,

        /// Manifest URL to append as the second path segment
        #[arg(long)]
        manifest: Option<String>,

        /// IMDB id to append after the manifest segment
        #[arg(long)]
        imdb: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
