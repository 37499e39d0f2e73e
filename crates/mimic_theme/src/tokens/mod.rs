//! Design tokens for control rendering
//!
//! Every built-in style is a bundle of tokens read by one shared painter:
//! - Metrics (intrinsic part sizes, border widths)
//! - Palette (state colors for faces, borders, glyphs, menus)
//! - Radii (corner rounding per control family)

mod metrics;
mod palette;
mod radius;

pub use metrics::*;
pub use palette::*;
pub use radius::*;

use crate::part::Part;
use crate::styling::ScrollbarColors;

/// Everything a token-driven style needs to measure and paint
#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub metrics: ControlMetrics,
    pub palette: ControlPalette,
    pub radii: RadiusTokens,
    /// Scrollbar colors installed when the theme is created
    pub scrollbar: ScrollbarColors,
    /// Draw 3D bevels instead of flat borders
    pub bevelled: bool,
    /// Let `classic_state` payload bits override the generic state
    pub honors_classic_state: bool,
    /// Parts this style has no visual for
    pub unthemed: &'static [Part],
}
