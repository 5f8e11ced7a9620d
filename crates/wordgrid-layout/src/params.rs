use serde::{Deserialize, Serialize};

/// Parameter validation errors.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("confidence_threshold must be within [0, 100], got {0}")]
    ConfidenceThreshold(f32),
    #[error("size_deviation must be finite and >= 0, got {0}")]
    SizeDeviation(f32),
    #[error("lane_tolerance_rel must be finite and > 0, got {0}")]
    LaneTolerance(f32),
}

/// Parameters of the symbol filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolFilterParams {
    /// Minimal recognizer confidence in `[0, 100]`.
    ///
    /// `None` switches the filter to confidence-blind mode, for recognizers
    /// that do not report a confidence. Symbols that carry no confidence are
    /// never rejected by this test.
    pub confidence_threshold: Option<f32>,

    /// Allowed relative deviation of a glyph height from the median height.
    pub size_deviation: f32,
}

impl Default for SymbolFilterParams {
    fn default() -> Self {
        Self {
            confidence_threshold: Some(65.0),
            size_deviation: 0.5,
        }
    }
}

impl SymbolFilterParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if let Some(t) = self.confidence_threshold {
            if !(0.0..=100.0).contains(&t) {
                return Err(ParamsError::ConfidenceThreshold(t));
            }
        }
        if !self.size_deviation.is_finite() || self.size_deviation < 0.0 {
            return Err(ParamsError::SizeDeviation(self.size_deviation));
        }
        Ok(())
    }
}

/// How glyph centers are quantized into grid coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapStrategy {
    /// Cluster observed centers into lanes (robust to skew and uneven spacing).
    #[default]
    LaneClustering,
    /// `round(x0 / median_width)`, `round(y0 / median_height)`.
    TileSize,
}

/// Parameters of the grid mapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMapperParams {
    pub strategy: SnapStrategy,
    /// Lane tolerance as a fraction of the median glyph height.
    pub lane_tolerance_rel: f32,
}

impl Default for GridMapperParams {
    fn default() -> Self {
        Self {
            strategy: SnapStrategy::LaneClustering,
            lane_tolerance_rel: 0.5,
        }
    }
}

impl GridMapperParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.lane_tolerance_rel.is_finite() || self.lane_tolerance_rel <= 0.0 {
            return Err(ParamsError::LaneTolerance(self.lane_tolerance_rel));
        }
        Ok(())
    }
}

/// Filter and mapper parameters bundled together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub filter: SymbolFilterParams,
    pub mapper: GridMapperParams,
}

impl LayoutParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.filter.validate()?;
        self.mapper.validate()
    }
}
