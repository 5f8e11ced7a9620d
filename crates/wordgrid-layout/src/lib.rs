//! Grid reconstruction from noisy single-letter OCR symbols.
//!
//! ## Quickstart
//!
//! ```
//! use wordgrid_core::{BBox, Symbol};
//! use wordgrid_layout::{GridMapper, GridMapperParams, SymbolFilter, SymbolFilterParams};
//!
//! let symbols = vec![
//!     Symbol::new("C", BBox::new(0.0, 0.0, 18.0, 20.0), 90.0),
//!     Symbol::new("A", BBox::new(30.0, 1.0, 48.0, 21.0), 88.0),
//!     Symbol::new("T", BBox::new(60.0, 0.0, 78.0, 20.0), 93.0),
//! ];
//!
//! let filtered = SymbolFilter::new(SymbolFilterParams::default()).filter(&symbols);
//! let layout = GridMapper::new(GridMapperParams::default()).map(&filtered);
//! assert_eq!(layout.grid.to_rows(), vec!["CAT"]);
//! ```
//!
//! Algorithm:
//! 1. Keep symbols that normalize to one letter `A..=Z` with enough confidence.
//! 2. Compute the median glyph height and drop glyphs far from it.
//! 3. Cluster x-centers and y-centers into lanes; a value joins a lane while it
//!    stays within `lane_tolerance_rel * median_height` of the lane's first value.
//! 4. Lane index in sorted order is the column / row coordinate.
//! 5. Each glyph snaps to its nearest column lane and row lane.
//! 6. The first glyph to claim a cell keeps it.

mod filter;
mod lanes;
mod mapper;
mod params;

pub use filter::{normalize_letter, FilteredSymbols, SymbolFilter};
pub use lanes::{cluster_lanes, nearest_lane, Lane};
pub use mapper::{GridLayout, GridMapper};
pub use params::{GridMapperParams, LayoutParams, ParamsError, SnapStrategy, SymbolFilterParams};
