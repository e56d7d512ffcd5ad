//! Chart configuration.
//!
//! `Rose` collects every knob the diagram understands, with the same
//! defaults throughout: build one, then call `layout()` for the pure
//! geometry or `to_svg()` for a finished drawing.

use crate::defaults;
use crate::errors::LayoutError;
use crate::layout::RoseLayout;
use crate::types::Color;

/// A rose/petal (coxcomb) diagram configuration.
///
/// The primary magnitude series is required; everything else is optional.
#[derive(Debug, Clone)]
pub struct Rose {
    pub(crate) area1: Vec<f64>,
    pub(crate) area2: Option<Vec<f64>>,
    pub(crate) spokes: Option<Vec<f64>>,
    pub(crate) labels: Option<Vec<String>>,
    pub(crate) stats: bool,
    pub(crate) dp: usize,
    pub(crate) scale: f64,
    pub(crate) clockwise: bool,
    pub(crate) length_mode: bool,
    pub(crate) lines: bool,
    pub(crate) center_inset: f64,
    pub(crate) bins: Option<usize>,
    pub(crate) piece_colors: [Color; 2],
    pub(crate) legend: Option<bool>,
    pub(crate) legend_labels: [String; 2],
}

impl Rose {
    /// Create a chart from the primary magnitude series.
    pub fn new(area1: impl Into<Vec<f64>>) -> Self {
        Rose {
            area1: area1.into(),
            area2: None,
            spokes: None,
            labels: None,
            stats: true,
            dp: defaults::STAT_DECIMALS,
            scale: defaults::SCALE,
            clockwise: true,
            length_mode: false,
            lines: false,
            center_inset: defaults::CENTER_INSET,
            bins: None,
            piece_colors: [
                Color::Named("white".to_string()),
                Color::Named("gray".to_string()),
            ],
            legend: None,
            legend_labels: ["Series 1".to_string(), "Series 2".to_string()],
        }
    }

    /// Overlay a second series as a second petal layer.
    pub fn comparison(mut self, area2: impl Into<Vec<f64>>) -> Self {
        self.area2 = Some(area2.into());
        self
    }

    /// Per-bin uncertainty magnitudes, drawn as spokes along each bisector.
    pub fn spokes(mut self, spokes: impl Into<Vec<f64>>) -> Self {
        self.spokes = Some(spokes.into());
        self
    }

    /// Per-bin text labels anchored near the rim.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Append the formatted primary value to each label (default true).
    pub fn stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }

    /// Decimal places for the appended statistic (default 1).
    pub fn decimal_places(mut self, dp: usize) -> Self {
        self.dp = dp;
        self
    }

    /// Overall size multiplier: the largest wedge tip reaches this radius
    /// on the unit circle (default 0.8). Values outside (0, 1] are accepted
    /// and simply change visual size or overlap.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Angular direction (default true: clockwise from 12 o'clock).
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Radius-proportional instead of area-proportional wedges
    /// (default false).
    pub fn length_proportional(mut self, length_mode: bool) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Draw a radial separator at each bin boundary (default false).
    pub fn separators(mut self, lines: bool) -> Self {
        self.lines = lines;
        self
    }

    /// Inset radius near the circle center where petal edges stop
    /// (default 0.03).
    pub fn center_inset(mut self, inset: f64) -> Self {
        self.center_inset = inset;
        self
    }

    /// Override the angular division count. By default each series divides
    /// the circle by its own length.
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }

    /// Fill colors for the primary and secondary petals
    /// (default white / gray).
    pub fn piece_colors(mut self, primary: Color, secondary: Color) -> Self {
        self.piece_colors = [primary, secondary];
        self
    }

    /// Force the legend on or off. By default it is shown iff a comparison
    /// series is present.
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Legend entry text (default "Series 1" / "Series 2").
    pub fn legend_labels(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.legend_labels = [primary.into(), secondary.into()];
        self
    }

    pub(crate) fn show_legend(&self) -> bool {
        self.legend.unwrap_or(self.area2.is_some())
    }

    /// Compute the wedge layout: pure geometry, no drawing.
    pub fn layout(&self) -> Result<RoseLayout, LayoutError> {
        crate::layout::layout(self)
    }

    /// Lay out and render to an SVG document of the given pixel size.
    pub fn to_svg(&self, width: u32, height: u32) -> Result<String, miette::Report> {
        crate::render::to_svg(self, width, height)
    }
}
