use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Default file written when saving is requested
pub const DEFAULT_OUTPUT_PATH: &str = "processed_tweet_data.csv";

/// One value of a feature row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// JSON lists such as hashtags or mentions, and values of an unexpected type
    Json(Value),
    /// Placeholder for an absent optional field or a `null` value
    Missing,
}

impl Cell {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(f) => Some(*f),
            Cell::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Render the cell as a CSV field
    pub fn to_field(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            // Debug formatting keeps the fractional part on whole numbers
            Cell::Float(f) => format!("{:?}", f),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Json(v) => v.to_string(),
            Cell::Missing => String::new(),
        }
    }
}

/// A named output column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CreatedAt,
    Source,
    OriginalText,
    CleanText,
    Sentiment,
    Polarity,
    Subjectivity,
    Lang,
    FavoriteCount,
    RetweetCount,
    OriginalAuthor,
    ScreenCount,
    FollowersCount,
    FriendsCount,
    PossiblySensitive,
    Hashtags,
    UserMentions,
    Place,
    PlaceCoordBoundaries,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::CreatedAt => "created_at",
            Column::Source => "source",
            Column::OriginalText => "original_text",
            Column::CleanText => "clean_text",
            Column::Sentiment => "sentiment",
            Column::Polarity => "polarity",
            Column::Subjectivity => "subjectivity",
            Column::Lang => "lang",
            Column::FavoriteCount => "favorite_count",
            Column::RetweetCount => "retweet_count",
            Column::OriginalAuthor => "original_author",
            Column::ScreenCount => "screen_count",
            Column::FollowersCount => "followers_count",
            Column::FriendsCount => "friends_count",
            Column::PossiblySensitive => "possibly_sensitive",
            Column::Hashtags => "hashtags",
            Column::UserMentions => "user_mentions",
            Column::Place => "place",
            Column::PlaceCoordBoundaries => "place_coord_boundaries",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const CORE_COLUMNS: &[Column] = &[
    Column::CreatedAt,
    Column::Source,
    Column::OriginalText,
    Column::Polarity,
    Column::Subjectivity,
    Column::Lang,
    Column::FavoriteCount,
    Column::RetweetCount,
    Column::OriginalAuthor,
    Column::FollowersCount,
    Column::FriendsCount,
    Column::PossiblySensitive,
    Column::Hashtags,
    Column::UserMentions,
    Column::Place,
];

const EXTENDED_COLUMNS: &[Column] = &[
    Column::CreatedAt,
    Column::Source,
    Column::OriginalText,
    Column::CleanText,
    Column::Sentiment,
    Column::Polarity,
    Column::Subjectivity,
    Column::Lang,
    Column::FavoriteCount,
    Column::RetweetCount,
    Column::OriginalAuthor,
    Column::ScreenCount,
    Column::FollowersCount,
    Column::FriendsCount,
    Column::PossiblySensitive,
    Column::Hashtags,
    Column::UserMentions,
    Column::Place,
    Column::PlaceCoordBoundaries,
];

/// Which declared column list the table is built with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSet {
    #[default]
    Core,
    Extended,
}

impl ColumnSet {
    pub fn columns(self) -> &'static [Column] {
        match self {
            ColumnSet::Core => CORE_COLUMNS,
            ColumnSet::Extended => EXTENDED_COLUMNS,
        }
    }

    pub fn names(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.name()).collect()
    }
}

/// Options for reading the newline-delimited input
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Stop after this many records
    pub limit: Option<usize>,

    /// Ignore whitespace-only lines instead of failing on them
    pub skip_blank_lines: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            limit: None,
            skip_blank_lines: false,
        }
    }
}

/// Configuration for building the feature table
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub columns: ColumnSet,

    /// Write the table as CSV after building it
    pub save: bool,

    /// Destination for the CSV, overwritten when saving
    pub output_path: PathBuf,

    pub load: LoadOptions,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            columns: ColumnSet::Core,
            save: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            load: LoadOptions::default(),
        }
    }
}
