use serde::{Deserialize, Serialize};

/// Standard tile values, `A..=Z`.
pub const STANDARD_LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Per-letter point table indexed `A..=Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterScores([u32; 26]);

impl Default for LetterScores {
    fn default() -> Self {
        Self(STANDARD_LETTER_SCORES)
    }
}

impl LetterScores {
    pub fn new(table: [u32; 26]) -> Self {
        Self(table)
    }

    /// Override the value of one letter; non-letters are ignored.
    pub fn with_score(mut self, letter: char, points: u32) -> Self {
        if let Some(idx) = letter_index(letter) {
            self.0[idx] = points;
        }
        self
    }

    /// Points for one letter (case-insensitive); `0` outside `A..=Z`.
    #[inline]
    pub fn letter(&self, letter: char) -> u32 {
        letter_index(letter).map_or(0, |idx| self.0[idx])
    }

    /// Sum of the letter values of `word`, saturating at `u32::MAX`.
    pub fn word(&self, word: &str) -> u32 {
        word.chars().fold(0u32, |acc, c| acc.saturating_add(self.letter(c)))
    }

    pub fn table(&self) -> &[u32; 26] {
        &self.0
    }
}

fn letter_index(letter: char) -> Option<usize> {
    let c = letter.to_ascii_uppercase();
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}
