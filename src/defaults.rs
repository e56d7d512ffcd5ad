//! Default sizes and settings shared by the layout engine and the renderer.

use std::f64::consts::PI;

/// Arc samples per full bin; two-series bins split these 50/50
pub const ARC_SAMPLES: usize = 100;
/// Area-equalizing factor: radius = sqrt(v * AREA_FACTOR) makes petal area
/// proportional to v
pub const AREA_FACTOR: f64 = 12.0 / PI;
/// Label anchor radius when no statistic is attached
pub const LABEL_RADIUS: f64 = 0.92;
/// Label anchor radius when the formatted value is attached below the label
pub const LABEL_STAT_RADIUS: f64 = 0.86;
/// Overall size multiplier for the largest wedge
pub const SCALE: f64 = 0.8;
/// Radius below which petal edges are pulled in, so wedges never meet in a
/// single degenerate point at the origin
pub const CENTER_INSET: f64 = 0.03;
/// Decimal places for the per-bin statistic
pub const STAT_DECIMALS: usize = 1;

// Renderer defaults (pixels unless noted)
/// Margin outside the rim (fraction of the unit radius) when labels are drawn
pub const LABEL_MARGIN: f64 = 0.12;
/// Margin outside the rim when no labels are drawn
pub const BARE_MARGIN: f64 = 0.04;
pub const STROKE_WIDTH: f64 = 1.0;
pub const FONT_SIZE: f64 = 12.0;
pub const FONT_FAMILY: &str = "sans-serif";
pub const LEGEND_SWATCH: f64 = 12.0;
pub const LEGEND_PAD: f64 = 10.0;
pub const LEGEND_GAP: f64 = 6.0;
