//! Word extraction and scoring on sparse letter grids.
//!
//! ## Quickstart
//!
//! ```
//! use wordgrid_core::Grid;
//! use wordgrid_words::{extract_words, Dictionary, LetterScores, Scorer};
//!
//! let grid = Grid::from_rows(&["CAT", ".R.", ".T."]);
//! let extraction = extract_words(&grid);
//!
//! let dictionary = Dictionary::from_words(["cat", "art"]);
//! let scores = LetterScores::default();
//! let sheet = Scorer::new(&dictionary, &scores).score(&extraction.candidates);
//! assert_eq!(sheet.total, 8);
//! ```

mod dictionary;
mod extract;
mod letters;
mod scorer;

pub use dictionary::{Dictionary, DictionaryError};
pub use extract::{
    dedup_by_text, extract_words, scan_runs, Extraction, ExtractionMode, MIN_WORD_LEN,
};
pub use letters::{LetterScores, STANDARD_LETTER_SCORES};
pub use scorer::{ScoreSheet, Scorer};
