//! Word-level sentiment lexicon.
//!
//! Each scored word maps to a polarity in `[-1, 1]` and a subjectivity in
//! `[0, 1]`. Intensifiers scale the word that follows them, negators flip it.
//! Lookups are case-insensitive.

use std::collections::{HashMap, HashSet};

/// Scores attached to a lexicon word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

// (word, polarity, subjectivity)
const WORDS: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("loving", 0.6, 0.9),
    ("lovely", 0.5, 0.75),
    ("like", 0.2, 0.4),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("beautiful", 0.85, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("cool", 0.35, 0.65),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("interesting", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("positive", 0.23, 0.55),
    ("strong", 0.43, 0.73),
    ("stronger", 0.43, 0.73),
    ("successful", 0.75, 0.95),
    ("success", 0.3, 0.2),
    ("win", 0.8, 0.4),
    ("winning", 0.5, 0.75),
    ("gain", 0.3, 0.3),
    ("gains", 0.3, 0.3),
    ("growth", 0.2, 0.2),
    ("boom", 0.4, 0.4),
    ("recovery", 0.25, 0.3),
    ("rally", 0.3, 0.3),
    ("profit", 0.3, 0.2),
    ("profitable", 0.5, 0.6),
    ("healthy", 0.5, 0.5),
    ("safe", 0.5, 0.5),
    ("stable", 0.2, 0.3),
    ("fair", 0.7, 0.9),
    ("free", 0.4, 0.8),
    ("helpful", 0.5, 0.6),
    ("hope", 0.3, 0.5),
    ("hopeful", 0.4, 0.8),
    ("optimistic", 0.6, 0.8),
    ("thanks", 0.2, 0.2),
    ("thank", 0.2, 0.2),
    ("proud", 0.8, 1.0),
    ("excited", 0.38, 0.75),
    ("exciting", 0.3, 0.8),
    ("easy", 0.43, 0.83),
    ("important", 0.4, 1.0),
    ("smart", 0.21, 0.64),
    ("clear", 0.1, 0.38),
    ("true", 0.35, 0.65),
    ("right", 0.29, 0.54),
    ("new", 0.14, 0.45),
    ("rich", 0.38, 0.75),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("poor", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
    ("ugly", -0.7, 1.0),
    ("stupid", -0.8, 1.0),
    ("boring", -1.0, 1.0),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.3, 0.3),
    ("loss", -0.3, 0.3),
    ("losses", -0.3, 0.3),
    ("lose", -0.4, 0.3),
    ("losing", -0.4, 0.3),
    ("crisis", -0.4, 0.5),
    ("crash", -0.6, 0.5),
    ("recession", -0.5, 0.4),
    ("inflation", -0.2, 0.3),
    ("debt", -0.2, 0.2),
    ("unemployment", -0.3, 0.2),
    ("collapse", -0.6, 0.5),
    ("decline", -0.3, 0.3),
    ("weak", -0.38, 0.63),
    ("weaker", -0.38, 0.63),
    ("risky", -0.3, 0.6),
    ("dangerous", -0.6, 0.9),
    ("fear", -0.4, 0.6),
    ("worried", -0.4, 0.8),
    ("worry", -0.4, 0.6),
    ("scary", -0.5, 1.0),
    ("crazy", -0.6, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("sick", -0.71, 0.86),
    ("dead", -0.2, 0.4),
    ("broken", -0.4, 0.4),
    ("corrupt", -0.5, 0.5),
    ("unfair", -0.5, 0.9),
    ("expensive", -0.5, 0.7),
    ("annoying", -0.8, 0.9),
    ("pathetic", -1.0, 1.0),
    ("disaster", -0.7, 0.6),
    ("problem", -0.2, 0.3),
    ("problems", -0.2, 0.3),
    ("false", -0.4, 0.6),
    ("fake", -0.5, 1.0),
    ("old", 0.1, 0.2),
    ("serious", -0.33, 0.67),
    ("shame", -0.5, 0.6),
    ("sorry", -0.5, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("economic", 0.2, 0.1),
    (":)", 0.5, 1.0),
    (":-)", 0.5, 1.0),
    ("=)", 0.5, 1.0),
    (":d", 1.0, 1.0),
    (";)", 0.25, 1.0),
    ("<3", 0.5, 0.6),
    (":(", -0.75, 1.0),
    (":-(", -0.75, 1.0),
    ("=(", -0.75, 1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("highly", 1.3),
    ("most", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.5),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
    "dont", "cant", "wont", "isnt", "arent", "wasnt", "didnt", "doesnt",
];

/// A lexicon of sentiment-bearing words plus modifier words
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, WordScore>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl Lexicon {
    /// An empty lexicon with no words or modifiers
    pub fn empty() -> Self {
        Lexicon {
            words: HashMap::new(),
            intensifiers: HashMap::new(),
            negators: HashSet::new(),
        }
    }

    /// Add or replace a scored word; scores are clamped to their ranges
    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.words.insert(
            word.to_lowercase(),
            WordScore {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    pub fn insert_intensifier(&mut self, word: &str, intensity: f64) {
        self.intensifiers.insert(word.to_lowercase(), intensity.max(0.0));
    }

    pub fn insert_negator(&mut self, word: &str) {
        self.negators.insert(word.to_lowercase());
    }

    pub fn score(&self, token: &str) -> Option<WordScore> {
        self.words.get(token).copied()
    }

    pub fn intensity(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    /// Whether the token negates what follows, including `n't` contractions
    pub fn is_negator(&self, token: &str) -> bool {
        token.ends_with("n't") || self.negators.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut lexicon = Lexicon::empty();
        for &(word, polarity, subjectivity) in WORDS {
            lexicon.insert(word, polarity, subjectivity);
        }
        for &(word, intensity) in INTENSIFIERS {
            lexicon.insert_intensifier(word, intensity);
        }
        for &word in NEGATORS {
            lexicon.insert_negator(word);
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scores_in_range() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.is_empty());
        for &(word, _, _) in WORDS {
            let score = lexicon.score(word).unwrap();
            assert!((-1.0..=1.0).contains(&score.polarity), "{word}");
            assert!((0.0..=1.0).contains(&score.subjectivity), "{word}");
        }
    }

    #[test]
    fn test_modifier_words_are_not_scored() {
        let lexicon = Lexicon::default();
        for &(word, _) in INTENSIFIERS {
            assert!(lexicon.score(word).is_none(), "{word}");
        }
        for &word in NEGATORS {
            assert!(lexicon.score(word).is_none(), "{word}");
        }
    }

    #[test]
    fn test_insert_clamps_and_lowercases() {
        let mut lexicon = Lexicon::empty();
        lexicon.insert("Stellar", 3.0, -1.0);

        let score = lexicon.score("stellar").unwrap();
        assert_eq!(score.polarity, 1.0);
        assert_eq!(score.subjectivity, 0.0);
    }

    #[test]
    fn test_contractions_negate() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_negator("don't"));
        assert!(lexicon.is_negator("never"));
        assert!(!lexicon.is_negator("good"));
    }
}
