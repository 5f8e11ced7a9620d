use serde::{Deserialize, Serialize};

use crate::GridCoords;

/// Scan direction of a word candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Axis {
    /// Unit step `(dc, dr)` along the axis.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }

    /// Unit step across the axis.
    #[inline]
    pub fn perpendicular(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }
}

/// A maximal run of letters recovered from the grid.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordCandidate {
    /// Letters in reading order.
    pub text: String,
    /// Grid cell of each letter, same order as `text`.
    pub path: Vec<GridCoords>,
    pub axis: Axis,
}

impl WordCandidate {
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Dictionary-validated word with its point value.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScoredWord {
    pub text: String,
    pub points: u32,
}
