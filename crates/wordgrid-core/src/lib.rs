//! Core types for letter-tile grid reconstruction.
//!
//! This crate is intentionally small and purely data-oriented. It does *not*
//! depend on any OCR engine or image type: symbols arrive as plain text plus
//! a pixel bounding box.

mod grid;
mod logger;
mod symbol;
mod word;

pub use grid::{Grid, GridBounds, GridCoords, LetterMap};
pub use symbol::{BBox, FilteredGlyph, Symbol};
pub use word::{Axis, ScoredWord, WordCandidate};

#[cfg(feature = "tracing")]
pub use logger::{init_tracing, init_tracing_with};

pub use logger::init_with_level;
