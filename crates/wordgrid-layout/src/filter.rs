use log::debug;
use serde::{Deserialize, Serialize};
use wordgrid_core::{FilteredGlyph, Symbol};

use crate::SymbolFilterParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Glyphs that survived filtering plus the statistics the mapper needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredSymbols {
    pub glyphs: Vec<FilteredGlyph>,
    /// Median glyph height in pixels, `0.0` when `glyphs` is empty.
    pub median_height: f32,
}

impl FilteredSymbols {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }
}

/// Normalize recognizer text to one uppercase letter `A..=Z`.
///
/// Surrounding whitespace is ignored; anything else than exactly one Latin
/// letter yields `None`.
pub fn normalize_letter(text: &str) -> Option<char> {
    let mut chars = text.trim().chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let c = c.to_ascii_uppercase();
    c.is_ascii_uppercase().then_some(c)
}

/// Median of a slice; mean of the two middle values for even lengths.
pub(crate) fn median(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let mut v = values.to_vec();
    v.sort_by(f32::total_cmp);
    let m = v.len();
    Some(if m % 2 == 1 {
        v[m / 2]
    } else {
        0.5 * (v[m / 2 - 1] + v[m / 2])
    })
}

/// Rejects non-letters, low-confidence symbols and outlier-size glyphs.
#[derive(Clone, Debug, Default)]
pub struct SymbolFilter {
    params: SymbolFilterParams,
}

impl SymbolFilter {
    pub fn new(params: SymbolFilterParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &SymbolFilterParams {
        &self.params
    }

    /// Filter raw recognizer output.
    ///
    /// Returns an empty result when fewer than two glyphs survive either the
    /// letter/confidence stage or the size stage.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, symbols), fields(num_symbols = symbols.len()))
    )]
    pub fn filter(&self, symbols: &[Symbol]) -> FilteredSymbols {
        let letters: Vec<FilteredGlyph> = symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| self.passes_confidence(s) && s.bbox.is_well_formed())
            .filter_map(|(idx, s)| {
                normalize_letter(&s.text).map(|letter| FilteredGlyph::new(letter, s.bbox, idx))
            })
            .collect();

        debug!(
            "symbol filter: {} of {} symbols are confident letters",
            letters.len(),
            symbols.len()
        );

        if letters.len() < 2 {
            return FilteredSymbols::empty();
        }

        let heights: Vec<f32> = letters.iter().map(|g| g.height).collect();
        let Some(median_height) = median(&heights) else {
            return FilteredSymbols::empty();
        };

        let lo = median_height * (1.0 - self.params.size_deviation);
        let hi = median_height * (1.0 + self.params.size_deviation);
        let glyphs: Vec<FilteredGlyph> = letters
            .into_iter()
            .filter(|g| g.height >= lo && g.height <= hi)
            .collect();

        debug!(
            "symbol filter: median height {:.2}px, {} glyphs within [{:.2}, {:.2}]",
            median_height,
            glyphs.len(),
            lo,
            hi
        );

        if glyphs.len() < 2 {
            return FilteredSymbols::empty();
        }

        FilteredSymbols {
            glyphs,
            median_height,
        }
    }

    fn passes_confidence(&self, symbol: &Symbol) -> bool {
        match (self.params.confidence_threshold, symbol.confidence) {
            (Some(threshold), Some(conf)) => conf >= threshold,
            _ => true,
        }
    }
}
