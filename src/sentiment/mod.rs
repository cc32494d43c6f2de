//! Lexical sentiment annotation
//!
//! Scores text for polarity (negative to positive) and subjectivity
//! (fact to opinion) with a bag-of-words lexicon. Every text is scored
//! independently; text without any known word scores neutral.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{find_sentiments, Sentiment, SentimentAnalyzer, SentimentLabel};
pub use lexicon::{Lexicon, WordScore};
