use log::debug;
use serde::{Deserialize, Serialize};
use wordgrid_core::{ScoredWord, WordCandidate};

use crate::{Dictionary, LetterScores};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Valid words of one scan and their total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Sorted by text, case-insensitive.
    pub words: Vec<ScoredWord>,
    pub total: u32,
}

impl ScoreSheet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Dictionary validation and point counting.
#[derive(Clone, Copy, Debug)]
pub struct Scorer<'a> {
    dictionary: &'a Dictionary,
    letter_scores: &'a LetterScores,
}

impl<'a> Scorer<'a> {
    pub fn new(dictionary: &'a Dictionary, letter_scores: &'a LetterScores) -> Self {
        Self {
            dictionary,
            letter_scores,
        }
    }

    /// Score candidates. Words missing from the dictionary are dropped silently.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, candidates),
            fields(num_candidates = candidates.len())
        )
    )]
    pub fn score(&self, candidates: &[WordCandidate]) -> ScoreSheet {
        let mut words: Vec<ScoredWord> = candidates
            .iter()
            .filter(|c| self.dictionary.contains(&c.text))
            .map(|c| ScoredWord {
                text: c.text.clone(),
                points: self.letter_scores.word(&c.text),
            })
            .collect();
        words.sort_by_cached_key(|w| w.text.to_lowercase());

        let total = words
            .iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.points));
        debug!(
            "scorer: {} of {} candidates are dictionary words, total {}",
            words.len(),
            candidates.len(),
            total
        );
        ScoreSheet { words, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::Axis;

    fn cand(text: &str) -> WordCandidate {
        WordCandidate {
            text: text.to_string(),
            path: Vec::new(),
            axis: Axis::Horizontal,
        }
    }

    #[test]
    fn keeps_dictionary_words_sorted() {
        let dict = Dictionary::from_words(["zap", "art", "cat"]);
        let scores = LetterScores::default();
        let candidates = [cand("ZAP"), cand("CAT"), cand("XQ"), cand("ART")];
        let sheet = Scorer::new(&dict, &scores).score(&candidates);
        let texts: Vec<&str> = sheet.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["ART", "CAT", "ZAP"]);
        assert_eq!(sheet.words[2].points, 10 + 1 + 3);
        assert_eq!(sheet.total, 3 + 5 + 14);
    }

    #[test]
    fn nothing_valid_is_an_empty_sheet() {
        let dict = Dictionary::from_words(["cat"]);
        let scores = LetterScores::default();
        let sheet = Scorer::new(&dict, &scores).score(&[cand("TAC")]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.total, 0);
        assert_eq!(Scorer::new(&dict, &scores).score(&[]), ScoreSheet::default());
    }

    #[test]
    fn total_saturates_with_huge_tables() {
        let dict = Dictionary::from_words(["go", "to"]);
        let scores = LetterScores::default().with_score('O', u32::MAX - 1);
        let sheet = Scorer::new(&dict, &scores).score(&[cand("GO"), cand("TO")]);
        assert_eq!(sheet.words[0].points, u32::MAX);
        assert_eq!(sheet.total, u32::MAX);
    }

    #[test]
    fn custom_table_is_used() {
        let dict = Dictionary::from_words(["cat"]);
        let scores = LetterScores::default().with_score('C', 0);
        let sheet = Scorer::new(&dict, &scores).score(&[cand("CAT")]);
        assert_eq!(sheet.total, 2);
    }
}
