use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};
use wordgrid_core::{Grid, LetterMap, Symbol, WordCandidate};
use wordgrid_layout::{
    FilteredSymbols, GridLayout, GridMapper, LayoutParams, ParamsError, SymbolFilter,
};
use wordgrid_words::{extract_words, Dictionary, Extraction, LetterScores, ScoreSheet, Scorer};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Configuration of a [`WordScanner`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    /// Filter and mapper parameters, serialized as top-level `filter` and
    /// `mapper` keys.
    #[serde(flatten)]
    pub layout: LayoutParams,
    pub letter_scores: LetterScores,
}

impl ScanParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.layout.validate()
    }
}

/// Everything one scan produced, stage by stage.
#[derive(Clone, Debug)]
pub struct ScanResult {
    /// Number of symbols handed to the scanner.
    pub num_symbols: usize,
    pub filtered: FilteredSymbols,
    pub layout: GridLayout,
    pub extraction: Extraction,
    pub sheet: ScoreSheet,
}

impl ScanResult {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.layout.grid
    }

    #[inline]
    pub fn letters(&self) -> &LetterMap {
        &self.layout.letters
    }

    #[inline]
    pub fn candidates(&self) -> &[WordCandidate] {
        &self.extraction.candidates
    }

    /// `true` when no dictionary word was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sheet.is_empty()
    }
}

/// End-to-end scan engine.
///
/// Holds only immutable configuration and a shared read-only dictionary, so
/// it is `Send + Sync` and can be used from several threads at once.
#[derive(Clone, Debug)]
pub struct WordScanner {
    params: ScanParams,
    filter: SymbolFilter,
    mapper: GridMapper,
    dictionary: Arc<Dictionary>,
}

impl WordScanner {
    /// Create a scanner after validating `params`.
    pub fn new(dictionary: Arc<Dictionary>, params: ScanParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            filter: SymbolFilter::new(params.layout.filter.clone()),
            mapper: GridMapper::new(params.layout.mapper.clone()),
            params,
            dictionary,
        })
    }

    /// Scanner with default parameters.
    pub fn with_defaults(dictionary: Arc<Dictionary>) -> Self {
        let params = ScanParams::default();
        Self {
            filter: SymbolFilter::new(params.layout.filter.clone()),
            mapper: GridMapper::new(params.layout.mapper.clone()),
            params,
            dictionary,
        }
    }

    #[inline]
    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    #[inline]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Stage 1: drop noise symbols.
    pub fn filter(&self, symbols: &[Symbol]) -> FilteredSymbols {
        self.filter.filter(symbols)
    }

    /// Stage 2: snap glyphs to grid coordinates.
    pub fn map(&self, filtered: &FilteredSymbols) -> GridLayout {
        self.mapper.map(filtered)
    }

    /// Stage 3: recover word candidates.
    pub fn extract(&self, grid: &Grid) -> Extraction {
        extract_words(grid)
    }

    /// Stage 4: validate and score.
    pub fn score(&self, candidates: &[WordCandidate]) -> ScoreSheet {
        Scorer::new(&self.dictionary, &self.params.letter_scores).score(candidates)
    }

    /// Run all four stages on one batch of recognizer output.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, symbols), fields(num_symbols = symbols.len()))
    )]
    pub fn scan(&self, symbols: &[Symbol]) -> ScanResult {
        let filtered = self.filter(symbols);
        let layout = self.map(&filtered);
        let extraction = self.extract(&layout.grid);
        let sheet = self.score(&extraction.candidates);

        info!(
            "scan: {} symbols -> {} glyphs -> {} cells -> {} candidates ({:?}) -> {} words, \
             {} points",
            symbols.len(),
            filtered.len(),
            layout.grid.len(),
            extraction.candidates.len(),
            extraction.mode,
            sheet.words.len(),
            sheet.total
        );

        ScanResult {
            num_symbols: symbols.len(),
            filtered,
            layout,
            extraction,
            sheet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::BBox;
    use wordgrid_layout::{SnapStrategy, SymbolFilterParams};
    use wordgrid_words::ExtractionMode;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn scanner_is_shareable() {
        assert_send_sync::<WordScanner>();
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut params = ScanParams::default();
        params.layout.filter = SymbolFilterParams {
            size_deviation: f32::NAN,
            ..SymbolFilterParams::default()
        };
        let err = WordScanner::new(Arc::new(Dictionary::default()), params).unwrap_err();
        assert!(matches!(err, ParamsError::SizeDeviation(_)));
    }

    #[test]
    fn params_json_keeps_flat_sections() {
        let json = r#"{
            "filter": {"confidence_threshold": null},
            "mapper": {"strategy": "tile_size"}
        }"#;
        let params: ScanParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.layout.filter.confidence_threshold, None);
        assert_eq!(params.layout.mapper.strategy, SnapStrategy::TileSize);
        assert_eq!(params.letter_scores, LetterScores::default());

        let back = serde_json::to_value(&params).unwrap();
        assert!(back.get("filter").is_some());
        assert!(back.get("mapper").is_some());
        assert!(back.get("layout").is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn empty_input_is_a_normal_outcome() {
        let scanner = WordScanner::with_defaults(Arc::new(Dictionary::from_words(["cat"])));
        let result = scanner.scan(&[]);
        assert!(result.is_empty());
        assert!(result.grid().is_empty());
        assert_eq!(result.extraction.mode, ExtractionMode::TooSmall);
        assert_eq!(result.sheet.total, 0);
    }

    #[test]
    fn stages_compose_like_scan() {
        let scanner = WordScanner::with_defaults(Arc::new(Dictionary::from_words(["go"])));
        let symbols = vec![
            Symbol::new("G", BBox::new(0.0, 0.0, 20.0, 24.0), 80.0),
            Symbol::new("O", BBox::new(32.0, 0.0, 52.0, 24.0), 80.0),
        ];
        let filtered = scanner.filter(&symbols);
        let layout = scanner.map(&filtered);
        let extraction = scanner.extract(&layout.grid);
        let sheet = scanner.score(&extraction.candidates);
        assert_eq!(sheet, scanner.scan(&symbols).sheet);
        assert_eq!(sheet.total, 3);
    }
}
