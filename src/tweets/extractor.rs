use crate::error::{Result, TweetError};
use crate::sentiment::{self, SentimentLabel};
use crate::tweets::table::TweetTable;
use crate::tweets::types::{Cell, Column, ExtractConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

static RETWEET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*RT\b:?").unwrap());

static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+:?").unwrap());

static HASHTAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extracts per-field columns from a list of tweet records
///
/// Every `find_*` pass returns one value per record, in record order.
/// Required fields fail with [`TweetError::MissingField`] when absent;
/// optional fields fall back to a placeholder.
///
/// # Example
/// ```rust
/// use tweetdf::{ExtractConfig, TweetExtractor};
/// use serde_json::json;
///
/// # fn main() -> tweetdf::Result<()> {
/// let tweets = vec![json!({
///     "text": "I love this",
///     "created_at": "t1",
///     "source": "web",
///     "lang": "en",
///     "favorite_count": 1,
///     "retweet_count": 0,
///     "user": {"screen_name": "a", "followers_count": 1, "friends_count": 1},
///     "entities": {"hashtags": [], "user_mentions": []}
/// })];
///
/// let table = TweetExtractor::new(&tweets).get_tweet_df(&ExtractConfig::default())?;
/// assert_eq!(table.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct TweetExtractor<'a> {
    tweets: &'a [Value],
}

impl<'a> TweetExtractor<'a> {
    pub fn new(tweets: &'a [Value]) -> Self {
        TweetExtractor { tweets }
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    pub fn find_created_time(&self) -> Result<Vec<Cell>> {
        self.required(&["created_at"], text_cell)
    }

    pub fn find_source(&self) -> Result<Vec<Cell>> {
        self.required(&["source"], text_cell)
    }

    pub fn find_full_text(&self) -> Result<Vec<Cell>> {
        self.required(&["text"], text_cell)
    }

    pub fn find_lang(&self) -> Result<Vec<Cell>> {
        self.required(&["lang"], text_cell)
    }

    pub fn find_favourite_count(&self) -> Result<Vec<Cell>> {
        self.required(&["favorite_count"], count_cell)
    }

    pub fn find_retweet_count(&self) -> Result<Vec<Cell>> {
        self.required(&["retweet_count"], count_cell)
    }

    pub fn find_screen_name(&self) -> Result<Vec<Cell>> {
        self.required(&["user", "screen_name"], text_cell)
    }

    pub fn find_followers_count(&self) -> Result<Vec<Cell>> {
        self.required(&["user", "followers_count"], count_cell)
    }

    pub fn find_friends_count(&self) -> Result<Vec<Cell>> {
        self.required(&["user", "friends_count"], count_cell)
    }

    pub fn find_hashtags(&self) -> Result<Vec<Cell>> {
        self.required(&["entities", "hashtags"], list_cell)
    }

    pub fn find_mentions(&self) -> Result<Vec<Cell>> {
        self.required(&["entities", "user_mentions"], list_cell)
    }

    /// `possibly_sensitive`, or [`Cell::Missing`] when the record does not carry it
    pub fn is_sensitive(&self) -> Vec<Cell> {
        self.optional(&["possibly_sensitive"], Cell::Missing, flag_cell)
    }

    /// `user.location`, or an empty string when absent
    pub fn find_location(&self) -> Vec<Cell> {
        self.optional(&["user", "location"], Cell::Text(String::new()), text_cell)
    }

    pub fn find_statuses_count(&self) -> Vec<Cell> {
        self.optional(&["user", "statuses_count"], Cell::Missing, count_cell)
    }

    /// Bounding box corners of the tweet's place, when it has one
    pub fn find_place_coord_boundaries(&self) -> Vec<Cell> {
        self.optional(&["place", "bounding_box", "coordinates"], Cell::Missing, list_cell)
    }

    pub fn find_clean_text(&self) -> Result<Vec<String>> {
        Ok(plain_text(&self.find_full_text()?)
            .iter()
            .map(|t| clean_text(t))
            .collect())
    }

    /// Polarity and subjectivity columns for the given texts
    pub fn find_sentiments(&self, text: &[String]) -> (Vec<f64>, Vec<f64>) {
        sentiment::find_sentiments(text)
    }

    /// Build the feature table for the configured column set
    ///
    /// Writes the table to `config.output_path` when `config.save` is set.
    pub fn get_tweet_df(&self, config: &ExtractConfig) -> Result<TweetTable> {
        let text = self.find_full_text()?;
        let plain = plain_text(&text);
        let (polarity, subjectivity) = self.find_sentiments(&plain);

        let mut columns = Vec::with_capacity(config.columns.columns().len());
        for &column in config.columns.columns() {
            let cells: Vec<Cell> = match column {
                Column::CreatedAt => self.find_created_time()?,
                Column::Source => self.find_source()?,
                Column::OriginalText => text.clone(),
                Column::CleanText => plain.iter().map(|t| Cell::Text(clean_text(t))).collect(),
                Column::Sentiment => polarity
                    .iter()
                    .map(|&p| Cell::Text(SentimentLabel::from_polarity(p).to_string()))
                    .collect(),
                Column::Polarity => polarity.iter().copied().map(Cell::Float).collect(),
                Column::Subjectivity => subjectivity.iter().copied().map(Cell::Float).collect(),
                Column::Lang => self.find_lang()?,
                Column::FavoriteCount => self.find_favourite_count()?,
                Column::RetweetCount => self.find_retweet_count()?,
                Column::OriginalAuthor => self.find_screen_name()?,
                Column::ScreenCount => self.find_statuses_count(),
                Column::FollowersCount => self.find_followers_count()?,
                Column::FriendsCount => self.find_friends_count()?,
                Column::PossiblySensitive => self.is_sensitive(),
                Column::Hashtags => self.find_hashtags()?,
                Column::UserMentions => self.find_mentions()?,
                Column::Place => self.find_location(),
                Column::PlaceCoordBoundaries => self.find_place_coord_boundaries(),
            };
            columns.push((column, cells));
        }

        let table = TweetTable::from_columns(columns, self.tweets.len())?;
        debug!(rows = table.len(), columns = table.columns().len(), "assembled tweet table");

        if config.save {
            table.to_csv(&config.output_path)?;
            debug!(path = %config.output_path.display(), "wrote tweet table");
        }

        Ok(table)
    }

    /// Collect a field whose key must be present in every record
    fn required(&self, path: &[&str], convert: fn(&Value) -> Option<Cell>) -> Result<Vec<Cell>> {
        self.tweets
            .iter()
            .enumerate()
            .map(|(index, tweet)| {
                lookup(tweet, path)
                    .map(|value| to_cell(value, convert))
                    .ok_or_else(|| TweetError::MissingField {
                        index,
                        field: path.join("."),
                    })
            })
            .collect()
    }

    /// Collect a field that may be absent; `null` counts as absent
    fn optional(&self, path: &[&str], absent: Cell, convert: fn(&Value) -> Option<Cell>) -> Vec<Cell> {
        self.tweets
            .iter()
            .map(|tweet| match lookup(tweet, path) {
                None | Some(Value::Null) => absent.clone(),
                Some(value) => to_cell(value, convert),
            })
            .collect()
    }
}

/// Walk nested objects along `path`
fn lookup<'v>(record: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(record, |value, key| value.as_object()?.get(*key))
}

/// `null` becomes [`Cell::Missing`]; values `convert` rejects are kept as raw JSON
fn to_cell(value: &Value, convert: fn(&Value) -> Option<Cell>) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        other => convert(other).unwrap_or_else(|| Cell::Json(other.clone())),
    }
}

fn text_cell(value: &Value) -> Option<Cell> {
    value.as_str().map(|s| Cell::Text(s.to_string()))
}

fn count_cell(value: &Value) -> Option<Cell> {
    value.as_i64().map(Cell::Int)
}

fn flag_cell(value: &Value) -> Option<Cell> {
    value.as_bool().map(Cell::Bool)
}

fn list_cell(value: &Value) -> Option<Cell> {
    value.is_array().then(|| Cell::Json(value.clone()))
}

/// Text to score; non-string text scores as empty
fn plain_text(cells: &[Cell]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| cell.as_str().unwrap_or_default().to_string())
        .collect()
}

/// Strip URLs, mentions, the retweet marker and hashtag signs from tweet text
pub fn clean_text(text: &str) -> String {
    let text = URL_REGEX.replace_all(text, " ");
    let text = RETWEET_REGEX.replace(&text, " ");
    let text = MENTION_REGEX.replace_all(&text, " ");
    let text = HASHTAG_REGEX.replace_all(&text, "$1");
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}
