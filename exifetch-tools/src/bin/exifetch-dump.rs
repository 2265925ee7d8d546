//! Prints the Exif tags of a JPEG file or URL
//!
//! Options can also be set via environment variables with `EXIFETCH_` prefix.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use exifetch::{ByteFetcher, ByteRange, FetchConfig, HttpFetcher, TagMap};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Bytes fetched from `--range-start` if no length is given
pub const DEFAULT_RANGE_LENGTH: u64 = 128 * 1024;

#[derive(Parser, Debug)]
#[command(name = "exifetch-dump", version, about, long_about = None)]
struct Args {
    /// Path or http(s) URL of a JPEG image
    source: String,

    /// Only fetch bytes from here, negative values count from the end
    #[arg(long, env = "EXIFETCH_RANGE_START", allow_hyphen_values = true)]
    range_start: Option<i64>,

    /// Number of bytes fetched from the range start
    #[arg(long, default_value_t = DEFAULT_RANGE_LENGTH, env = "EXIFETCH_RANGE_LENGTH")]
    range_length: u64,

    /// Request timeout
    #[arg(long, default_value_t = 30, env = "EXIFETCH_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Only print the value of this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Debug logging, unless RUST_LOG is set
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            range: self
                .range_start
                .map(|start| ByteRange::new(start, self.range_length)),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }

    fn is_url(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    let tags = match load(&args).await {
        Ok(tags) => tags,
        Err(err) => {
            eprintln!("{}: {err}", args.source);
            return ExitCode::FAILURE;
        }
    };

    match &args.tag {
        Some(name) => match tags.get_by_name(name) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("Tag '{name}' not found");
                return ExitCode::FAILURE;
            }
        },
        None => print!("{tags}"),
    }

    ExitCode::SUCCESS
}

async fn load(args: &Args) -> Result<TagMap, Box<dyn std::error::Error>> {
    let data = if args.is_url() {
        let fetcher = HttpFetcher::new(args.fetch_config())?;
        fetcher.fetch(&args.source).await?.to_vec()
    } else {
        tokio::fs::read(&args.source).await?
    };

    tracing::debug!("Read {} bytes", data.len());

    Ok(exifetch::decode(&data[..])?)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
