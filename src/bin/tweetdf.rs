//! tweetdf: Build a flat feature table from newline-delimited tweet JSON
//!
//! Usage:
//!   # Summarize and preview the table
//!   tweetdf data/Economic_Twitter_Data.json
//!
//!   # Save processed_tweet_data.csv in the working directory
//!   tweetdf data/Economic_Twitter_Data.json --save
//!
//!   # Extended columns, first 100 tweets, custom destination
//!   tweetdf tweets.json --extended --limit 100 --save -o features.csv

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tweetdf::{ColumnSet, ExtractConfig, TweetExtractor};

#[derive(Parser, Debug)]
#[command(name = "tweetdf")]
#[command(about = "Extract tweet features into a CSV table", long_about = None)]
struct Args {
    /// Newline-delimited JSON file, one tweet per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the table as CSV
    #[arg(long)]
    save: bool,

    /// CSV destination (default: processed_tweet_data.csv)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Add clean_text, sentiment, screen_count and place_coord_boundaries
    #[arg(long)]
    extended: bool,

    /// Only load the first N tweets
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Skip blank lines instead of failing on them
    #[arg(long)]
    skip_blank_lines: bool,

    /// Number of rows to print as CSV (0 disables the preview)
    #[arg(long, default_value_t = 5, value_name = "N")]
    preview: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Build config
    let mut config = ExtractConfig::default();
    if args.extended {
        config.columns = ColumnSet::Extended;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    config.save = args.save;
    config.load.limit = args.limit;
    config.load.skip_blank_lines = args.skip_blank_lines;

    let (count, tweets) = tweetdf::tweets::read_json_with(&args.input, &config.load)
        .with_context(|| format!("Cannot load tweets from {}", args.input.display()))?;

    let table = TweetExtractor::new(&tweets)
        .get_tweet_df(&config)
        .context("Failed to build tweet table")?;

    println!(
        "Loaded {} tweets into {} rows x {} columns",
        count,
        table.len(),
        table.columns().len()
    );

    if args.preview > 0 && !table.is_empty() {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        table
            .head(args.preview)
            .write_csv(&mut handle)
            .context("Failed to print preview")?;
        handle.flush()?;
    }

    if config.save {
        println!("File Successfully Saved.");
    }

    Ok(())
}
