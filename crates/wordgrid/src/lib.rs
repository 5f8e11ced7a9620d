//! High-level facade crate for the `wordgrid-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying crates,
//! - [`WordScanner`], the end-to-end engine: symbol filter -> grid mapper ->
//!   word extractor -> scorer,
//! - [`LiveSession`], a wrapper for callers that scan on a fixed cadence,
//! - JSON config and report helpers used by the `wordgrid` binary.
//!
//! ## Quickstart
//!
//! ```
//! use std::sync::Arc;
//! use wordgrid::{BBox, Dictionary, Symbol, WordScanner};
//!
//! let dictionary = Arc::new(Dictionary::from_words(["cat"]));
//! let scanner = WordScanner::with_defaults(dictionary);
//!
//! let symbols = vec![
//!     Symbol::new("C", BBox::new(0.0, 0.0, 18.0, 20.0), 90.0),
//!     Symbol::new("A", BBox::new(30.0, 0.0, 48.0, 20.0), 90.0),
//!     Symbol::new("T", BBox::new(60.0, 0.0, 78.0, 20.0), 90.0),
//! ];
//! let result = scanner.scan(&symbols);
//! assert_eq!(result.sheet.total, 5);
//! ```
//!
//! ## API map
//! - `wordgrid::core`: symbols, glyphs, grid, word candidates.
//! - `wordgrid::layout`: symbol filter and lane-clustering grid mapper.
//! - `wordgrid::words`: word extraction, dictionary, scoring.
//!
//! Every stage is synchronous and free of shared mutable state, so a scan
//! can run on any worker thread. The engine never fails on bad input; it
//! degrades to an empty result instead.

mod engine;
mod io;
mod session;

pub use wordgrid_core as core;
pub use wordgrid_layout as layout;
pub use wordgrid_words as words;

pub use engine::{ScanParams, ScanResult, WordScanner};
pub use io::{load_symbols, LetterCell, ScanConfig, ScanIoError, ScanReport};
pub use session::{LiveSession, TickOutcome};

pub use wordgrid_core::{
    Axis, BBox, FilteredGlyph, Grid, GridCoords, LetterMap, ScoredWord, Symbol, WordCandidate,
};
pub use wordgrid_layout::{GridLayout, ParamsError, SnapStrategy};
pub use wordgrid_words::{Dictionary, DictionaryError, ExtractionMode, LetterScores, ScoreSheet};
