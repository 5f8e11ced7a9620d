use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in image pixels.
///
/// `(x0, y0)` is the top-left corner, `(x1, y1)` the bottom-right one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// All coordinates finite and both extents strictly positive.
    pub fn is_well_formed(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }

    /// Uniformly scale every coordinate by `k`.
    pub fn scaled(&self, k: f32) -> Self {
        Self {
            x0: self.x0 * k,
            y0: self.y0 * k,
            x1: self.x1 * k,
            y1: self.y1 * k,
        }
    }
}

/// One recognized character as reported by the OCR collaborator.
///
/// This is the thing you obtain by adapting the output of your recognizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Recognized text. Expected to be a single character, but recognizers
    /// happily report blobs like `"rn"` or `"|"`.
    pub text: String,

    /// Bounding box in image pixels.
    pub bbox: BBox,

    /// Recognizer confidence in `[0, 100]`.
    ///
    /// `None` when the recognizer does not report one.
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl Symbol {
    pub fn new(text: impl Into<String>, bbox: BBox, confidence: f32) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence: Some(confidence),
        }
    }

    /// Symbol without a confidence value.
    pub fn unrated(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence: None,
        }
    }
}

/// A symbol that survived filtering, normalized to one uppercase letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilteredGlyph {
    /// Uppercase ASCII letter `A..=Z`.
    pub letter: char,
    pub bbox: BBox,
    /// Bounding box center in image pixels.
    pub center: Point2<f32>,
    pub width: f32,
    pub height: f32,
    /// Index of the originating symbol in the recognizer output.
    pub source_index: usize,
}

impl FilteredGlyph {
    pub fn new(letter: char, bbox: BBox, source_index: usize) -> Self {
        Self {
            letter,
            bbox,
            center: bbox.center(),
            width: bbox.width(),
            height: bbox.height(),
            source_index,
        }
    }
}
