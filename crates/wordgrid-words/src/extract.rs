//! Row/column run scanning with the connectivity rule and bootstrap fallback.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use wordgrid_core::{Axis, Grid, GridBounds, GridCoords, WordCandidate};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Shortest letter run that counts as a word.
pub const MIN_WORD_LEN: usize = 2;

/// How the candidate list of an [`Extraction`] came about.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Fewer than two occupied cells; nothing was scanned.
    TooSmall,
    /// At least one run crosses another word.
    Connected,
    /// No crossing runs; the single distinct loose run was accepted as the
    /// first word on an empty board.
    Bootstrap,
    /// No crossing runs and several distinct loose runs; all rejected.
    Ambiguous,
    /// No run of `MIN_WORD_LEN` letters at all.
    NoRuns,
}

/// Word candidates recovered from a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Deduplicated by text, first occurrence kept.
    pub candidates: Vec<WordCandidate>,
    pub mode: ExtractionMode,
}

impl Extraction {
    fn rejected(mode: ExtractionMode) -> Self {
        Self {
            candidates: Vec::new(),
            mode,
        }
    }
}

/// Extract word candidates from `grid`.
///
/// Rows are scanned first, then columns. A run of at least [`MIN_WORD_LEN`]
/// letters is kept when one of its cells has an occupied neighbor across the
/// scan direction. If no run qualifies, the scan is repeated without that
/// requirement and accepted only if it yields exactly one distinct text.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(grid), fields(cells = grid.len()))
)]
pub fn extract_words(grid: &Grid) -> Extraction {
    if grid.len() < 2 {
        return Extraction::rejected(ExtractionMode::TooSmall);
    }
    let Some(bounds) = grid.bounds() else {
        return Extraction::rejected(ExtractionMode::TooSmall);
    };

    let mut connected = scan_runs(grid, bounds, Axis::Horizontal, true);
    connected.extend(scan_runs(grid, bounds, Axis::Vertical, true));
    if !connected.is_empty() {
        let candidates = dedup_by_text(connected);
        debug!("word extractor: {} connected candidates", candidates.len());
        return Extraction {
            candidates,
            mode: ExtractionMode::Connected,
        };
    }

    let mut loose = scan_runs(grid, bounds, Axis::Horizontal, false);
    loose.extend(scan_runs(grid, bounds, Axis::Vertical, false));
    let loose = dedup_by_text(loose);
    match loose.len() {
        0 => {
            debug!("word extractor: no runs of {MIN_WORD_LEN}+ letters");
            Extraction::rejected(ExtractionMode::NoRuns)
        }
        1 => {
            debug!("word extractor: bootstrap word '{}'", loose[0].text);
            Extraction {
                candidates: loose,
                mode: ExtractionMode::Bootstrap,
            }
        }
        n => {
            debug!("word extractor: {n} unconnected runs, rejecting all as ambiguous");
            Extraction::rejected(ExtractionMode::Ambiguous)
        }
    }
}

/// Collect maximal runs along `axis` inside `bounds`.
///
/// A run is closed by an empty cell or by the far edge of `bounds`, so cells
/// at `i32::MAX` are handled without stepping past the coordinate range.
pub fn scan_runs(
    grid: &Grid,
    bounds: GridBounds,
    axis: Axis,
    require_connection: bool,
) -> Vec<WordCandidate> {
    let (lines, cells) = match axis {
        Axis::Horizontal => (
            bounds.min_row..=bounds.max_row,
            bounds.min_col..=bounds.max_col,
        ),
        Axis::Vertical => (
            bounds.min_col..=bounds.max_col,
            bounds.min_row..=bounds.max_row,
        ),
    };

    let mut out = Vec::new();
    for line in lines {
        let mut run = Run::default();
        for pos in cells.clone() {
            let g = match axis {
                Axis::Horizontal => GridCoords::new(pos, line),
                Axis::Vertical => GridCoords::new(line, pos),
            };
            match grid.get(g) {
                Some(letter) => {
                    run.text.push(letter);
                    run.path.push(g);
                    run.connected |= has_cross_neighbor(grid, g, axis);
                }
                None => run.flush(axis, require_connection, &mut out),
            }
        }
        run.flush(axis, require_connection, &mut out);
    }
    out
}

#[derive(Default)]
struct Run {
    text: String,
    path: Vec<GridCoords>,
    connected: bool,
}

impl Run {
    fn flush(&mut self, axis: Axis, require_connection: bool, out: &mut Vec<WordCandidate>) {
        if self.path.len() >= MIN_WORD_LEN && (self.connected || !require_connection) {
            out.push(WordCandidate {
                text: std::mem::take(&mut self.text),
                path: std::mem::take(&mut self.path),
                axis,
            });
        }
        self.text.clear();
        self.path.clear();
        self.connected = false;
    }
}

/// Keep the first candidate for every distinct text.
pub fn dedup_by_text(candidates: Vec<WordCandidate>) -> Vec<WordCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.text.clone()))
        .collect()
}

fn has_cross_neighbor(grid: &Grid, g: GridCoords, axis: Axis) -> bool {
    let (dc, dr) = axis.perpendicular();
    [g.checked_offset(-dc, -dr), g.checked_offset(dc, dr)]
        .into_iter()
        .flatten()
        .any(|n| grid.contains(n))
}
