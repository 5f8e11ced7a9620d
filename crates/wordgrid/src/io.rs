//! JSON configuration and report helpers.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use wordgrid_core::{BBox, GridCoords, ScoredWord, Symbol, WordCandidate};
use wordgrid_layout::ParamsError;
use wordgrid_words::{Dictionary, DictionaryError, ExtractionMode};

use crate::{ScanParams, ScanResult, WordScanner};

#[derive(thiserror::Error, Debug)]
pub enum ScanIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("invalid scan parameters: {0}")]
    Params(#[from] ParamsError),
}

/// Load a JSON array of recognizer symbols.
pub fn load_symbols(path: impl AsRef<Path>) -> Result<Vec<Symbol>, ScanIoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Configuration of a scan run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// JSON file with the recognizer output (array of symbols).
    #[serde(default)]
    pub symbols_path: Option<String>,
    /// Newline-separated word list.
    #[serde(default)]
    pub dictionary_path: Option<String>,
    /// Where to write the JSON report.
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub params: ScanParams,
}

impl ScanConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path, if any.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_ref().map(PathBuf::from)
    }

    /// Load the dictionary and build a scanner from this config.
    pub fn build_scanner(
        &self,
        dictionary_path: impl AsRef<Path>,
    ) -> Result<WordScanner, ScanIoError> {
        let dictionary = Dictionary::load(dictionary_path)?;
        Ok(WordScanner::new(Arc::new(dictionary), self.params.clone())?)
    }
}

/// One occupied grid cell with the glyph that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterCell {
    pub coords: GridCoords,
    pub letter: char,
    pub bbox: BBox,
    pub source_index: usize,
}

/// Serializable summary of a [`ScanResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub num_symbols: usize,
    pub num_glyphs: usize,
    pub median_height: f32,
    /// Occupied rectangle of the grid, `.` for empty cells.
    pub grid_rows: Vec<String>,
    /// Coordinates of the first character of `grid_rows[0]`.
    pub grid_origin: Option<GridCoords>,
    pub letters: Vec<LetterCell>,
    pub collisions: usize,
    pub mode: ExtractionMode,
    pub candidates: Vec<WordCandidate>,
    pub words: Vec<ScoredWord>,
    pub total: u32,
}

impl ScanReport {
    pub fn from_result(result: &ScanResult) -> Self {
        let grid = result.grid();
        Self {
            num_symbols: result.num_symbols,
            num_glyphs: result.filtered.len(),
            median_height: result.filtered.median_height,
            grid_rows: grid.to_rows(),
            grid_origin: grid
                .bounds()
                .map(|b| GridCoords::new(b.min_col, b.min_row)),
            letters: result
                .letters()
                .iter()
                .map(|(coords, glyph)| LetterCell {
                    coords: *coords,
                    letter: glyph.letter,
                    bbox: glyph.bbox,
                    source_index: glyph.source_index,
                })
                .collect(),
            collisions: result.layout.collisions,
            mode: result.extraction.mode,
            candidates: result.candidates().to_vec(),
            words: result.sheet.words.clone(),
            total: result.sheet.total,
        }
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
