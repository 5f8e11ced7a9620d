//! 1-D lane clustering of glyph center coordinates.

use serde::{Deserialize, Serialize};

/// A cluster of nearby 1-D coordinates treated as one grid row or column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Mean of the member values.
    pub position: f32,
    /// First (smallest) value placed in the lane.
    pub anchor: f32,
    pub members: usize,
}

/// Cluster `values` into lanes ordered by position.
///
/// Values are sorted ascending; a value joins the current lane while it is
/// within `tolerance` of the lane's *first* value, otherwise it opens a new
/// lane.
///
/// Non-finite values are ignored.
pub fn cluster_lanes(values: &[f32], tolerance: f32) -> Vec<Lane> {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Vec::new();
    }
    sorted.sort_by(f32::total_cmp);

    let mut lanes = Vec::new();
    let mut anchor = sorted[0];
    let mut sum = 0.0f32;
    let mut count = 0usize;
    for v in sorted {
        if count > 0 && v - anchor > tolerance {
            lanes.push(Lane {
                position: sum / count as f32,
                anchor,
                members: count,
            });
            anchor = v;
            sum = 0.0;
            count = 0;
        }
        sum += v;
        count += 1;
    }
    lanes.push(Lane {
        position: sum / count as f32,
        anchor,
        members: count,
    });
    lanes
}

/// Index of the lane whose position is closest to `value`.
///
/// Ties go to the lower index. `None` for an empty lane list.
pub fn nearest_lane(lanes: &[Lane], value: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, lane) in lanes.iter().enumerate() {
        let d = (lane.position - value).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}
