//! # tweetdf - Tweet Feature Tables
//!
//! Turns a newline-delimited export of tweet JSON into a flat feature table
//! (text, metadata, engagement counts and lexical sentiment), optionally
//! saved as CSV.
//!
//! ## Modules
//!
//! - **tweets**: loading, per-field extraction, table assembly and CSV output
//! - **sentiment**: bag-of-words polarity and subjectivity scoring
//!
//! ## Quick Start
//!
//! ```rust
//! use tweetdf::{ExtractConfig, TweetExtractor};
//! use serde_json::json;
//!
//! # fn main() -> tweetdf::Result<()> {
//! let tweets = vec![json!({
//!     "text": "Great news for the economy",
//!     "created_at": "Wed Jun 01 10:00:00 +0000 2022",
//!     "source": "web",
//!     "lang": "en",
//!     "favorite_count": 3,
//!     "retweet_count": 1,
//!     "user": {"screen_name": "econ", "followers_count": 10, "friends_count": 5},
//!     "entities": {"hashtags": [], "user_mentions": []}
//! })];
//!
//! let table = TweetExtractor::new(&tweets).get_tweet_df(&ExtractConfig::default())?;
//!
//! // one row, columns in the declared order
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.column_names()[0], "created_at");
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use tracing::debug;

pub mod error;
pub mod sentiment;
pub mod tweets;

// Re-export commonly used types for convenience
pub use error::{Result, TweetError};
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentLabel};
pub use tweets::{
    read_json, Cell, Column, ColumnSet, ExtractConfig, LoadOptions, TweetExtractor, TweetTable,
};

/// Main entry point: load a tweet file and build its feature table
///
/// Saves the table when `config.save` is set.
pub fn extract_tweet_table<P: AsRef<Path>>(path: P, config: &ExtractConfig) -> Result<TweetTable> {
    let (count, tweets) = tweets::read_json_with(path, &config.load)?;
    debug!(count, columns = ?config.columns, "extracting tweet features");

    TweetExtractor::new(&tweets).get_tweet_df(config)
}
