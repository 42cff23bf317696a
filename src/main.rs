mod cli;

use flixgate::{config, playback};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use fg_parser::{ParsedStreamingData, StreamMetadata};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "flixgate=trace,fg_parser=trace".to_string()
        } else {
            "flixgate=info,fg_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode { reference, json } => decode(&reference, json),
        Commands::Resolve {
            reference,
            addon,
            json,
        } => resolve(&reference, addon.as_deref(), cli.config.as_deref(), json),
        Commands::Encode {
            metadata,
            manifest,
            imdb,
        } => encode(&metadata, manifest.as_deref(), imdb.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("flixgate {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn decode(reference: &str, json: bool) -> Result<()> {
    let parsed = fg_parser::parse(reference).context("Failed to decode streaming reference")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print_summary(&parsed);
    }

    Ok(())
}

fn print_summary(parsed: &ParsedStreamingData) {
    let metadata = &parsed.metadata;

    if let Some(name) = metadata.name() {
        println!("Name: {}", name.replace('\n', " "));
    }
    println!("URL: {}", parsed.decoded_url.as_deref().unwrap_or("-"));
    if let Some(filename) = metadata.filename() {
        println!("Filename: {}", filename);
    }

    println!("\nQuality:");
    println!("  Resolution: {}", parsed.quality.resolution);
    println!("  Format: {}", parsed.quality.format);
    println!("  Codec: {}", parsed.quality.codec);
    println!("  Size: {}", parsed.quality.size);

    println!("\nMedia:");
    println!("  Title: {}", parsed.media.title);
    println!("  Year: {}", parsed.media.year);
    println!("  Release group: {}", parsed.media.release_group);

    if let Some(ref manifest) = parsed.manifest_url {
        println!("\nManifest: {}", manifest);
    }
    if let Some(ref imdb) = parsed.imdb_id {
        println!("IMDB: {}", imdb);
    }
}

fn resolve(
    reference: &str,
    addon: Option<&str>,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let Some(parsed) = fg_parser::safe_parse(reference) else {
        anyhow::bail!("Nothing to play: the streaming reference could not be decoded");
    };

    let resolved = playback::resolve_stream(&parsed, &config, addon)?;
    tracing::info!(
        "Resolved {:?} stream for addon '{}'",
        resolved.source,
        resolved.addon
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", resolved.url);
    }

    Ok(())
}

fn encode(metadata: &str, manifest: Option<&str>, imdb: Option<&str>) -> Result<()> {
    let metadata: StreamMetadata =
        serde_json::from_str(metadata).context("Stream metadata must be a JSON object")?;

    if imdb.is_some() && manifest.is_none() {
        tracing::warn!("No manifest given; the IMDB id will also be read as the manifest segment");
    }

    let segments: Vec<&str> = manifest.into_iter().chain(imdb).collect();
    let reference = fg_parser::encode_reference(&metadata, &segments);
    println!("{}", reference);

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!(
                "  Manifest template: {}",
                config.player.manifest_template.as_deref().unwrap_or("-")
            );
            println!("  Addons: {}", config.addons.len());
            println!(
                "    Bypassed: {}",
                config.addons.iter().filter(|a| a.bypass).count()
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Addons: {}", config.addons.len());
        }
    }

    Ok(())
}
