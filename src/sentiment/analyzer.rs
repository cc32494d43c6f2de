use crate::sentiment::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// Emoticons first so their punctuation is not dropped, then words with apostrophes
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[:;=]-?[()\[\]dp]|<3|[\p{L}\p{N}]+(?:'[\p{L}]+)*").unwrap()
});

/// Number of tokens before a scored word that can negate it
const NEGATION_WINDOW: usize = 2;

/// Polarity multiplier applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

/// Sentiment scores for one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sentiment {
    /// Negative-to-positive score in `[-1, 1]`
    pub polarity: f64,
    /// Opinion-vs-fact score in `[0, 1]`
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_polarity(self.polarity)
    }
}

/// Coarse sentiment class derived from polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bag-of-words polarity and subjectivity scorer
///
/// # Example
/// ```rust
/// use tweetdf::sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// let sentiment = analyzer.analyze("I love this");
/// assert!(sentiment.polarity > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        SentimentAnalyzer { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a single text; text with no scored words is neutral
    pub fn analyze(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut scored = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(score) = self.lexicon.score(token) else {
                continue;
            };

            let mut polarity = score.polarity;
            let mut subjectivity = score.subjectivity;

            if let Some(intensity) = i.checked_sub(1).and_then(|prev| self.lexicon.intensity(&tokens[prev])) {
                polarity *= intensity;
                subjectivity *= intensity;
            }

            if self.is_negated(&tokens, i) {
                polarity *= NEGATION_FACTOR;
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity.clamp(0.0, 1.0);
            scored += 1;
        }

        if scored == 0 {
            return Sentiment::NEUTRAL;
        }

        Sentiment {
            polarity: (polarity_sum / scored as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / scored as f64).clamp(0.0, 1.0),
        }
    }

    fn is_negated(&self, tokens: &[String], index: usize) -> bool {
        let start = index.saturating_sub(NEGATION_WINDOW);
        tokens[start..index].iter().any(|t| self.lexicon.is_negator(t))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase().replace('\u{2019}', "'");
    TOKEN_REGEX
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Score every text, returning parallel polarity and subjectivity columns
pub fn find_sentiments(texts: &[String]) -> (Vec<f64>, Vec<f64>) {
    let analyzer = SentimentAnalyzer::new();
    texts
        .iter()
        .map(|text| {
            let sentiment = analyzer.analyze(text);
            (sentiment.polarity, sentiment.subjectivity)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_positive_text() {
        let sentiment = SentimentAnalyzer::new().analyze("I love this");
        assert!(close(sentiment.polarity, 0.5));
        assert!(close(sentiment.subjectivity, 0.6));
        assert_eq!(sentiment.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_empty_and_factual_text_are_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze(""), Sentiment::NEUTRAL);
        assert_eq!(analyzer.analyze("   "), Sentiment::NEUTRAL);
        assert_eq!(analyzer.analyze("The meeting is at noon"), Sentiment::NEUTRAL);
        assert_eq!(analyzer.analyze("!!! ??? ..."), Sentiment::NEUTRAL);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        assert!(close(analyzer.analyze("not good").polarity, -0.35));
        assert!(analyzer.analyze("this isn't bad").polarity > 0.0);
        assert!(analyzer.analyze("I don\u{2019}t love it").polarity < 0.0);
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.analyze("good");
        let boosted = analyzer.analyze("very good");
        assert!(boosted.polarity > plain.polarity);
        assert!(boosted.subjectivity > plain.subjectivity);

        // Boosted scores still respect the ranges
        let maxed = analyzer.analyze("extremely perfect");
        assert_eq!(maxed.polarity, 1.0);
        assert_eq!(maxed.subjectivity, 1.0);
    }

    #[test]
    fn test_mixed_text_averages() {
        let sentiment = SentimentAnalyzer::new().analyze("good and bad");
        assert!(close(sentiment.polarity, 0.0));
        assert_eq!(sentiment.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_emoticons() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.analyze("see you tomorrow :)").polarity > 0.0);
        assert!(analyzer.analyze("missed the bus :(").polarity < 0.0);
    }

    #[test]
    fn test_ranges_hold_for_arbitrary_text() {
        let analyzer = SentimentAnalyzer::new();
        let samples = [
            "RT @someone: The economy is terrible terrible terrible!!! https://t.co/xyz",
            "not not not very very very extremely awesome",
            "\u{1F680}\u{1F680} to the moon",
            "Ünïcödé wörds and 12345",
            "never bad, never worst, never awful",
        ];
        for text in samples {
            let s = analyzer.analyze(text);
            assert!((-1.0..=1.0).contains(&s.polarity), "{text}");
            assert!((0.0..=1.0).contains(&s.subjectivity), "{text}");
        }
    }

    #[test]
    fn test_find_sentiments_is_parallel() {
        let texts = vec!["great".to_string(), String::new(), "awful".to_string()];
        let (polarity, subjectivity) = find_sentiments(&texts);

        assert_eq!(polarity.len(), 3);
        assert_eq!(subjectivity.len(), 3);
        assert!(polarity[0] > 0.0);
        assert_eq!(polarity[1], 0.0);
        assert!(polarity[2] < 0.0);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = Lexicon::empty();
        lexicon.insert("bullish", 0.6, 0.5);
        let analyzer = SentimentAnalyzer::with_lexicon(lexicon);

        assert!(close(analyzer.analyze("Bullish").polarity, 0.6));
        assert_eq!(analyzer.analyze("good"), Sentiment::NEUTRAL);
    }
}
