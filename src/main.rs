//! chia-nft CLI
//!
//! Entry point for the `chia-nft` command-line tool.

use chia_nft::metadata::Metadata;
use chia_nft::{Asset, DefaultSources, FetchConfig, Nft, VerificationReport};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chia-nft")]
#[command(about = "Verify NFT assets and normalize CHIP-0007 metadata", version)]
struct Cli {
    /// Path to config file with a [fetch] table
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Remote fetch timeout in seconds (0 disables the timeout)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash an asset and check that all of its sources agree
    Hash {
        /// URIs or file paths serving the same content
        #[arg(required = true)]
        uris: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Verify the data, metadata, and license assets of an NFT
    Nft {
        /// Sources for the NFT content
        #[arg(long, required = true, num_args = 1..)]
        data: Vec<String>,

        /// Sources for the metadata document
        #[arg(long, num_args = 1..)]
        metadata: Vec<String>,

        /// Sources for the license
        #[arg(long, num_args = 1..)]
        license: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Decode a CHIP-0007 metadata file and print it re-encoded
    Metadata {
        /// Path to the metadata JSON file
        file: PathBuf,

        /// Print only the attribute with this trait type
        #[arg(long, short = 'a')]
        attribute: Option<String>,

        /// Compact output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { uris, json } => {
            let sources = load_sources(cli.config.as_deref(), cli.timeout);
            run_hash(uris, json, &sources);
        }
        Commands::Nft {
            data,
            metadata,
            license,
            json,
        } => {
            let sources = load_sources(cli.config.as_deref(), cli.timeout);
            run_nft(data, metadata, license, json, &sources);
        }
        Commands::Metadata {
            file,
            attribute,
            compact,
        } => {
            run_metadata(&file, attribute.as_deref(), compact);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_sources(config_path: Option<&Path>, timeout: Option<u64>) -> DefaultSources {
    let config = FetchConfig::load(config_path).and_then(|c| c.with_timeout(timeout));
    match config {
        Ok(config) => DefaultSources::from_config(&config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct HashOutput<'a> {
    uris: &'a [String],
    sha256: &'a str,
}

fn run_hash(uris: Vec<String>, json: bool, sources: &DefaultSources) {
    let mut asset = Asset::new(uris);

    let digest = match asset.verify_with(sources) {
        Ok(digest) => digest.to_string(),
        Err(e) => {
            eprintln!("Verification failed: {}", e);
            process::exit(1);
        }
    };

    if json {
        print_json(&VerificationReport::new(HashOutput {
            uris: asset.uris(),
            sha256: &digest,
        }));
    } else {
        println!("{}", digest);
    }
}

fn run_nft(
    data: Vec<String>,
    metadata: Vec<String>,
    license: Vec<String>,
    json: bool,
    sources: &DefaultSources,
) {
    let mut nft = Nft::new(Asset::new(data));
    nft.metadata = Asset::new(metadata);
    nft.license = Asset::new(license);

    let hashes = match nft.verify_with(sources) {
        Ok(hashes) => hashes,
        Err(e) => {
            eprintln!("Verification failed: {}", e);
            process::exit(1);
        }
    };

    if json {
        print_json(&VerificationReport::new(hashes));
    } else {
        println!("data:     {}", hashes.data_hash);
        if let Some(ref hash) = hashes.metadata_hash {
            println!("metadata: {}", hash);
        }
        if let Some(ref hash) = hashes.license_hash {
            println!("license:  {}", hash);
        }
    }
}

fn run_metadata(path: &Path, attribute: Option<&str>, compact: bool) {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let metadata = match Metadata::from_json(&contents) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid metadata in {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let output = match attribute {
        Some(trait_type) => match metadata.attribute(trait_type) {
            Some(attr) => to_json(attr, compact),
            None => {
                eprintln!("No attribute with trait_type {:?}", trait_type);
                process::exit(1);
            }
        },
        None => to_json(&metadata, compact),
    };
    println!("{}", output);
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match result {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", to_json(value, false));
}
