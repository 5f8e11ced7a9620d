use log::{debug, warn};
use wordgrid_core::{FilteredGlyph, Grid, GridCoords, LetterMap};

use crate::filter::{median, FilteredSymbols};
use crate::lanes::{cluster_lanes, nearest_lane, Lane};
use crate::{GridMapperParams, SnapStrategy};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Output of the grid mapper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    /// Sparse `(col, row) -> letter` grid.
    pub grid: Grid,
    /// `(col, row) -> glyph` back-map holding only the glyph that won each cell.
    pub letters: LetterMap,
    /// Column lanes ordered left to right (empty for `SnapStrategy::TileSize`).
    pub columns: Vec<Lane>,
    /// Row lanes ordered top to bottom (empty for `SnapStrategy::TileSize`).
    pub rows: Vec<Lane>,
    /// Glyphs that lost a cell to an earlier glyph.
    pub collisions: usize,
}

/// Assigns filtered glyphs to integer grid coordinates.
#[derive(Clone, Debug, Default)]
pub struct GridMapper {
    params: GridMapperParams,
}

impl GridMapper {
    pub fn new(params: GridMapperParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &GridMapperParams {
        &self.params
    }

    /// Map glyphs into a grid.
    ///
    /// Glyphs are inserted in input order, so on a coordinate collision the
    /// earlier glyph keeps the cell and the later one is dropped from both
    /// the grid and the letter map.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, filtered),
            fields(num_glyphs = filtered.glyphs.len())
        )
    )]
    pub fn map(&self, filtered: &FilteredSymbols) -> GridLayout {
        if filtered.glyphs.is_empty() {
            return GridLayout::default();
        }

        let (coords, columns, rows) = match self.params.strategy {
            SnapStrategy::LaneClustering => {
                let tolerance = filtered.median_height * self.params.lane_tolerance_rel;
                snap_to_lanes(&filtered.glyphs, tolerance)
            }
            SnapStrategy::TileSize => {
                let Some(coords) = snap_to_tile_size(&filtered.glyphs, filtered.median_height)
                else {
                    warn!("tile-size snapping needs positive median glyph size");
                    return GridLayout::default();
                };
                (coords, Vec::new(), Vec::new())
            }
        };

        let mut layout = GridLayout {
            columns,
            rows,
            ..GridLayout::default()
        };
        for (glyph, g) in filtered.glyphs.iter().zip(coords) {
            let Some(g) = g else {
                continue;
            };
            if layout.grid.insert(g, glyph.letter) {
                layout.letters.insert(g, glyph.clone());
            } else {
                layout.collisions += 1;
                debug!(
                    "cell ({}, {}) already holds '{}', dropping '{}' (symbol #{})",
                    g.col,
                    g.row,
                    layout.grid.get(g).unwrap_or('?'),
                    glyph.letter,
                    glyph.source_index
                );
            }
        }

        debug!(
            "grid mapper: {} cells from {} glyphs ({} columns, {} rows, {} collisions)",
            layout.grid.len(),
            filtered.glyphs.len(),
            layout.columns.len(),
            layout.rows.len(),
            layout.collisions
        );
        layout
    }
}

type Snapped = (Vec<Option<GridCoords>>, Vec<Lane>, Vec<Lane>);

fn snap_to_lanes(glyphs: &[FilteredGlyph], tolerance: f32) -> Snapped {
    let xs: Vec<f32> = glyphs.iter().map(|g| g.center.x).collect();
    let ys: Vec<f32> = glyphs.iter().map(|g| g.center.y).collect();
    let columns = cluster_lanes(&xs, tolerance);
    let rows = cluster_lanes(&ys, tolerance);

    let coords = glyphs
        .iter()
        .map(|g| {
            let col = nearest_lane(&columns, g.center.x)?;
            let row = nearest_lane(&rows, g.center.y)?;
            Some(GridCoords::new(col as i32, row as i32))
        })
        .collect();
    (coords, columns, rows)
}

fn snap_to_tile_size(
    glyphs: &[FilteredGlyph],
    median_height: f32,
) -> Option<Vec<Option<GridCoords>>> {
    let widths: Vec<f32> = glyphs.iter().map(|g| g.width).collect();
    let median_width = median(&widths)?;
    if !(median_width > 0.0 && median_height > 0.0) {
        return None;
    }
    Some(
        glyphs
            .iter()
            .map(|g| {
                let col = (g.bbox.x0 / median_width).round();
                let row = (g.bbox.y0 / median_height).round();
                (col.is_finite() && row.is_finite())
                    .then(|| GridCoords::new(col as i32, row as i32))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SymbolFilter, SymbolFilterParams};
    use wordgrid_core::{BBox, Symbol};

    const TILE: f32 = 40.0;

    fn tile(letter: &str, col: f32, row: f32) -> Symbol {
        let x0 = col * TILE + 4.0;
        let y0 = row * TILE + 4.0;
        Symbol::new(letter, BBox::new(x0, y0, x0 + 24.0, y0 + 30.0), 95.0)
    }

    fn layout_of(symbols: &[Symbol], params: GridMapperParams) -> GridLayout {
        let filtered = SymbolFilter::new(SymbolFilterParams::default()).filter(symbols);
        GridMapper::new(params).map(&filtered)
    }

    #[test]
    fn maps_a_crossing_layout() {
        let symbols = vec![
            tile("T", 3.0, 4.0),
            tile("C", 2.0, 2.0),
            tile("A", 3.0, 2.0),
            tile("R", 3.0, 3.0),
            tile("T", 4.0, 2.0),
        ];
        let layout = layout_of(&symbols, GridMapperParams::default());
        assert_eq!(layout.grid.to_rows(), vec!["CAT", ".R.", ".T."]);
        assert_eq!(layout.columns.len(), 3);
        assert_eq!(layout.rows.len(), 3);
        assert_eq!(layout.collisions, 0);
        assert_eq!(layout.letters.len(), 5);
    }

    #[test]
    fn lane_indices_start_at_zero_and_skip_empty_space() {
        // Two words far apart on the same row: lanes only exist where glyphs are.
        let symbols = vec![
            tile("A", 0.0, 0.0),
            tile("B", 1.0, 0.0),
            tile("C", 9.0, 0.0),
        ];
        let layout = layout_of(&symbols, GridMapperParams::default());
        assert_eq!(layout.grid.to_rows(), vec!["ABC"]);
    }

    #[test]
    fn jitter_within_tolerance_stays_in_lane() {
        let mut symbols = vec![tile("D", 0.0, 0.0), tile("O", 1.0, 0.0), tile("G", 2.0, 0.0)];
        symbols[1].bbox.y0 += 6.0;
        symbols[1].bbox.y1 += 6.0;
        let layout = layout_of(&symbols, GridMapperParams::default());
        assert_eq!(layout.rows.len(), 1);
        assert_eq!(layout.grid.to_rows(), vec!["DOG"]);
    }

    #[test]
    fn collision_keeps_first_glyph() {
        let mut second = tile("B", 0.0, 0.0);
        second.bbox.x0 += 3.0;
        second.bbox.x1 += 3.0;
        let symbols = vec![tile("A", 0.0, 0.0), second, tile("C", 1.0, 0.0)];
        let layout = layout_of(&symbols, GridMapperParams::default());
        assert_eq!(layout.collisions, 1);
        let cell = GridCoords::new(0, 0);
        assert_eq!(layout.grid.get(cell), Some('A'));
        assert_eq!(layout.letters[&cell].letter, 'A');
        assert_eq!(layout.letters[&cell].source_index, 0);
        assert!(layout.letters.values().all(|g| g.letter != 'B'));
    }

    #[test]
    fn tile_size_strategy_divides_by_median_size() {
        let symbols = vec![
            tile("C", 2.0, 2.0),
            tile("A", 3.0, 2.0),
            tile("T", 4.0, 2.0),
            tile("R", 3.0, 3.0),
        ];
        let params = GridMapperParams {
            strategy: SnapStrategy::TileSize,
            ..GridMapperParams::default()
        };
        let layout = layout_of(&symbols, params);
        // x0 = 84, 124, 164 over a median width of 24 -> 3.5, 5.17, 6.83.
        assert_eq!(layout.grid.len(), 4);
        assert!(layout.columns.is_empty());
        let cols: Vec<i32> = layout.grid.iter().map(|(g, _)| g.col).collect();
        assert_eq!(cols, vec![4, 5, 5, 7]);
        assert_eq!(layout.grid.get(GridCoords::new(5, 4)), Some('R'));
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let layout = GridMapper::default().map(&FilteredSymbols::empty());
        assert!(layout.grid.is_empty());
        assert!(layout.letters.is_empty());
    }
}
