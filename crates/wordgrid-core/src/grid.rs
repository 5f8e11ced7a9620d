use std::collections::btree_map::{self, BTreeMap, Entry};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FilteredGlyph;

/// Integer grid coordinates `(col, row)`.
///
/// Coordinates need not start at zero or be contiguous. Ordering is
/// column-major (`col` first), which is what `Grid` iterates in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GridCoords {
    pub col: i32,
    pub row: i32,
}

impl GridCoords {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Neighbor at `(col + dc, row + dr)`, `None` past the `i32` range.
    #[inline]
    pub fn checked_offset(self, dc: i32, dr: i32) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(dc)?,
            row: self.row.checked_add(dr)?,
        })
    }
}

/// Inclusive occupied bounding rectangle of a grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl GridBounds {
    pub fn cols(&self) -> u64 {
        (i64::from(self.max_col) - i64::from(self.min_col) + 1) as u64
    }

    pub fn rows(&self) -> u64 {
        (i64::from(self.max_row) - i64::from(self.min_row) + 1) as u64
    }
}

/// Back-map from grid cell to the glyph that produced it (visualization only).
pub type LetterMap = BTreeMap<GridCoords, FilteredGlyph>;

/// Sparse letter grid.
///
/// Holds at most one letter per coordinate: once a cell is occupied, later
/// inserts at the same coordinate are rejected (first writer wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<GridCoords, char>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from text rows. Row `r`, character `c` maps to
    /// `GridCoords { col: c, row: r }`; `.` and spaces are empty cells.
    ///
    /// ```
    /// use wordgrid_core::{Grid, GridCoords};
    ///
    /// let grid = Grid::from_rows(&["CAT", ".R.", ".T."]);
    /// assert_eq!(grid.len(), 5);
    /// assert_eq!(grid.get(GridCoords::new(1, 2)), Some('T'));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                grid.insert(GridCoords::new(c as i32, r as i32), ch);
            }
        }
        grid
    }

    /// Insert `letter` at `coords` unless the cell is already occupied.
    ///
    /// Returns `true` if the letter was stored.
    pub fn insert(&mut self, coords: GridCoords, letter: char) -> bool {
        match self.cells.entry(coords) {
            Entry::Vacant(slot) => {
                slot.insert(letter);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    #[inline]
    pub fn get(&self, coords: GridCoords) -> Option<char> {
        self.cells.get(&coords).copied()
    }

    #[inline]
    pub fn contains(&self, coords: GridCoords) -> bool {
        self.cells.contains_key(&coords)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, GridCoords, char> {
        self.cells.iter()
    }

    /// Occupied bounding rectangle, `None` for an empty grid.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut keys = self.cells.keys();
        let first = keys.next()?;
        let mut b = GridBounds {
            min_col: first.col,
            max_col: first.col,
            min_row: first.row,
            max_row: first.row,
        };
        for g in keys {
            b.min_col = b.min_col.min(g.col);
            b.max_col = b.max_col.max(g.col);
            b.min_row = b.min_row.min(g.row);
            b.max_row = b.max_row.max(g.row);
        }
        Some(b)
    }

    /// Render the occupied rectangle as text rows, `.` for empty cells.
    pub fn to_rows(&self) -> Vec<String> {
        let Some(b) = self.bounds() else {
            return Vec::new();
        };
        (b.min_row..=b.max_row)
            .map(|row| {
                (b.min_col..=b.max_col)
                    .map(|col| self.get(GridCoords::new(col, row)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (&'a GridCoords, &'a char);
    type IntoIter = btree_map::Iter<'a, GridCoords, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
