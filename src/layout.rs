//! The wedge layout engine.
//!
//! A pure function from (data, configuration) to polygons, line segments and
//! label anchors in unit-circle coordinates (Y-up, radius 1.0 = outer rim).
//! Nothing here draws; a rendering surface consumes the result.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::chart::Rose;
use crate::defaults;
use crate::errors::{LayoutError, LayoutWarning, SeriesId};
use crate::types::Scalar;

/// Which input series a petal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSlot {
    Primary,
    Secondary,
}

/// One wedge polygon
#[derive(Debug, Clone)]
pub struct Petal {
    pub bin: usize,
    pub slot: SeriesSlot,
    /// Scaled tip radius, at most the configured scale
    pub radius: f64,
    /// Closed vertex ring: inset edge point, arc samples at the tip radius,
    /// inset edge point
    pub vertices: Vec<DVec2>,
}

/// Uncertainty segment along a bin's bisector
#[derive(Debug, Clone, Copy)]
pub struct Spoke {
    pub bin: usize,
    pub from: DVec2,
    pub to: DVec2,
}

/// Cosmetic radial line at a bin boundary, from the inset circle to the rim
#[derive(Debug, Clone, Copy)]
pub struct Separator {
    pub from: DVec2,
    pub to: DVec2,
}

/// Text anchored near the rim on a bin's bisector
#[derive(Debug, Clone)]
pub struct BinLabel {
    pub bin: usize,
    pub at: DVec2,
    pub text: String,
    /// Formatted primary value, stacked under the label by the renderer
    pub stat: Option<String>,
}

/// Everything the renderer needs, plus the warnings layout accumulated.
/// Purely geometric data; computed fresh on every call.
#[derive(Debug, Clone, Default)]
pub struct RoseLayout {
    pub petals: Vec<Petal>,
    pub spokes: Vec<Spoke>,
    pub separators: Vec<Separator>,
    pub labels: Vec<BinLabel>,
    pub warnings: Vec<LayoutWarning>,
}

impl RoseLayout {
    pub fn primary_petals(&self) -> impl Iterator<Item = &Petal> {
        self.petals
            .iter()
            .filter(|p| p.slot == SeriesSlot::Primary)
    }

    pub fn secondary_petals(&self) -> impl Iterator<Item = &Petal> {
        self.petals
            .iter()
            .filter(|p| p.slot == SeriesSlot::Secondary)
    }
}

/// Angular frame: bins are measured as arc positions from 12 o'clock and
/// traversed clockwise or counter-clockwise.
#[derive(Debug, Clone, Copy)]
struct Compass {
    dir: f64,
}

impl Compass {
    fn new(clockwise: bool) -> Self {
        Compass {
            dir: if clockwise { -1.0 } else { 1.0 },
        }
    }

    /// Absolute angle (math convention) for arc position `t`
    fn angle(&self, t: f64) -> f64 {
        FRAC_PI_2 + self.dir * t
    }

    /// Point at arc position `t` and radius `r`
    fn point(&self, t: f64, r: f64) -> DVec2 {
        DVec2::from_angle(self.angle(t)) * r
    }
}

/// Magnitude transform. Area mode takes the square root so that displayed
/// polygon area, not radius, scales with the value.
fn transform(v: f64, length_mode: bool) -> f64 {
    if length_mode {
        v
    } else {
        (v * defaults::AREA_FACTOR).sqrt()
    }
}

fn validate_series(series: &[f64], id: SeriesId) -> Result<(), LayoutError> {
    for (index, &v) in series.iter().enumerate() {
        if !v.is_finite() {
            return Err(LayoutError::NonFiniteMagnitude { series: id, index });
        }
        if v < 0.0 {
            return Err(LayoutError::NegativeMagnitude {
                series: id,
                index,
                value: v,
            });
        }
    }
    Ok(())
}

/// Vertex ring for one petal spanning arc positions `t0..t1` at tip radius
/// `radius`. The radial edges are pulled in to `inset` rather than the
/// origin, and the ring closes back through those inset points, giving a
/// lens/petal outline instead of a true pie slice.
fn petal_vertices(
    compass: Compass,
    t0: f64,
    t1: f64,
    radius: f64,
    inset: f64,
    samples: usize,
) -> Vec<DVec2> {
    let mut verts = Vec::with_capacity(samples + 2);
    verts.push(compass.point(t0, inset));
    for i in 0..samples {
        let t = t0 + (t1 - t0) * i as f64 / (samples - 1) as f64;
        verts.push(compass.point(t, radius));
    }
    verts.push(compass.point(t1, inset));
    verts
}

/// Lay out one series worth of petals. With `split` set, each bin is shared
/// between two series and this series takes the half its slot selects.
fn series_petals(
    compass: Compass,
    slot: SeriesSlot,
    transformed: &[f64],
    divisions: usize,
    max_val: f64,
    scale: f64,
    inset: f64,
    split: bool,
) -> Vec<Petal> {
    let step = TAU / divisions as f64;
    let half = step / 2.0;
    transformed
        .iter()
        .enumerate()
        .map(|(bin, &tv)| {
            let radius = scale * tv / max_val;
            let start = bin as f64 * step;
            let (t0, t1, samples) = if !split {
                (start, start + step, defaults::ARC_SAMPLES)
            } else if slot == SeriesSlot::Primary {
                (start, start + half, defaults::ARC_SAMPLES / 2)
            } else {
                (start + half, start + step, defaults::ARC_SAMPLES / 2)
            };
            Petal {
                bin,
                slot,
                radius,
                vertices: petal_vertices(compass, t0, t1, radius, inset, samples),
            }
        })
        .collect()
}

/// Compute the full wedge layout for a configured chart.
///
/// Fails fast on input that would otherwise normalize by zero or put NaN in
/// the geometry; mismatched series lengths come back as warnings with
/// best-effort output.
pub fn layout(rose: &Rose) -> Result<RoseLayout, LayoutError> {
    if rose.area1.is_empty() {
        return Err(LayoutError::EmptySeries);
    }
    validate_series(&rose.area1, SeriesId::Primary)?;
    if let Some(area2) = &rose.area2 {
        validate_series(area2, SeriesId::Secondary)?;
    }
    if let Some(spokes) = &rose.spokes {
        validate_series(spokes, SeriesId::Spokes)?;
    }
    for (option, value) in [("scale", rose.scale), ("center_inset", rose.center_inset)] {
        if Scalar::try_new(value).is_err() {
            return Err(LayoutError::NonFiniteOption { option });
        }
    }

    let mut warnings = Vec::new();
    if let Some(area2) = &rose.area2 {
        if area2.len() != rose.area1.len() {
            let w = LayoutWarning::SeriesLengthMismatch {
                primary: rose.area1.len(),
                secondary: area2.len(),
            };
            crate::log::warn!("{}", w);
            warnings.push(w);
        }
    }
    if let Some(spokes) = &rose.spokes {
        if spokes.len() != rose.area1.len() {
            let w = LayoutWarning::SpokeLengthMismatch {
                primary: rose.area1.len(),
                spokes: spokes.len(),
            };
            crate::log::warn!("{}", w);
            warnings.push(w);
        }
    }

    let t1: Vec<f64> = rose
        .area1
        .iter()
        .map(|&v| transform(v, rose.length_mode))
        .collect();
    let t2: Option<Vec<f64>> = rose.area2.as_ref().map(|area2| {
        area2
            .iter()
            .map(|&v| transform(v, rose.length_mode))
            .collect()
    });

    // Normalize against the combined maximum so both layers share one scale
    let max_val = t1
        .iter()
        .chain(t2.iter().flatten())
        .fold(0.0_f64, |m, &v| m.max(v));
    if max_val <= 0.0 {
        return Err(LayoutError::AllZeroMagnitudes);
    }

    let compass = Compass::new(rose.clockwise);
    let inset = rose.center_inset;
    let scale = rose.scale;
    let split = t2.is_some();

    // With an explicit bin override every series shares that division;
    // otherwise each series divides the circle by its own length.
    let div1 = rose.bins.unwrap_or(rose.area1.len()).max(1);

    let mut petals = series_petals(
        compass,
        SeriesSlot::Primary,
        &t1,
        div1,
        max_val,
        scale,
        inset,
        split,
    );
    if let Some(t2) = &t2 {
        let div2 = rose.bins.unwrap_or(t2.len()).max(1);
        petals.extend(series_petals(
            compass,
            SeriesSlot::Secondary,
            t2,
            div2,
            max_val,
            scale,
            inset,
            split,
        ));
    }

    // Spokes scale by their own maximum, independent of the wedge scale
    let mut spoke_segments = Vec::new();
    if let Some(spokes) = &rose.spokes {
        if !spokes.is_empty() {
            let max_spoke = spokes.iter().fold(0.0_f64, |m, &v| m.max(v));
            if max_spoke <= 0.0 {
                return Err(LayoutError::AllZeroSpokes);
            }
            let div = rose.bins.unwrap_or(spokes.len()).max(1);
            let step = TAU / div as f64;
            for (bin, &u) in spokes.iter().enumerate() {
                let t = bin as f64 * step + step / 2.0;
                spoke_segments.push(Spoke {
                    bin,
                    from: compass.point(t, inset),
                    to: compass.point(t, scale * u / max_spoke),
                });
            }
        }
    }

    let mut separators = Vec::new();
    if rose.lines {
        let step = TAU / div1 as f64;
        for k in 0..div1 {
            let t = k as f64 * step;
            separators.push(Separator {
                from: compass.point(t, inset),
                to: compass.point(t, 1.0),
            });
        }
    }

    let mut labels = Vec::new();
    if let Some(texts) = &rose.labels {
        let step = TAU / div1 as f64;
        let anchor_radius = if rose.stats {
            defaults::LABEL_STAT_RADIUS
        } else {
            defaults::LABEL_RADIUS
        };
        for (bin, value) in rose.area1.iter().enumerate() {
            let Some(text) = texts.get(bin) else { break };
            let t = bin as f64 * step + step / 2.0;
            labels.push(BinLabel {
                bin,
                at: compass.point(t, anchor_radius),
                text: text.clone(),
                stat: rose
                    .stats
                    .then(|| format!("{:.prec$}", value, prec = rose.dp)),
            });
        }
    }

    crate::log::debug!(
        petals = petals.len(),
        spokes = spoke_segments.len(),
        separators = separators.len(),
        labels = labels.len(),
        "layout complete"
    );

    Ok(RoseLayout {
        petals,
        spokes: spoke_segments,
        separators,
        labels,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rose;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-12;

    fn arc_vertices(petal: &Petal) -> &[DVec2] {
        // First and last vertices are the inset edge points
        &petal.vertices[1..petal.vertices.len() - 1]
    }

    /// Angle of a vertex normalized to [0, 2pi)
    fn angle_of(v: DVec2) -> f64 {
        v.y.atan2(v.x).rem_euclid(TAU)
    }

    // ==================== petal counts ====================

    #[test]
    fn one_petal_per_bin() {
        let layout = Rose::new([1.0, 2.0, 3.0, 4.0]).layout().unwrap();
        assert_eq!(layout.petals.len(), 4);
        assert_eq!(layout.primary_petals().count(), 4);
        assert_eq!(layout.secondary_petals().count(), 0);
    }

    #[test]
    fn secondary_series_doubles_petals() {
        let layout = Rose::new([1.0, 2.0, 3.0])
            .comparison([2.0, 1.0, 3.0])
            .layout()
            .unwrap();
        assert_eq!(layout.primary_petals().count(), 3);
        assert_eq!(layout.secondary_petals().count(), 3);
    }

    #[test]
    fn mismatched_lengths_warn_and_lay_out_both() {
        let layout = Rose::new([1.0, 2.0, 3.0, 4.0, 5.0])
            .comparison([1.0, 2.0, 3.0])
            .layout()
            .unwrap();
        assert_eq!(layout.primary_petals().count(), 5);
        assert_eq!(layout.secondary_petals().count(), 3);
        assert_eq!(
            layout.warnings,
            vec![LayoutWarning::SeriesLengthMismatch {
                primary: 5,
                secondary: 3
            }]
        );
    }

    // ==================== radii ====================

    #[test]
    fn max_wedge_reaches_scale_exactly() {
        let layout = Rose::new([3.0, 9.0, 1.0]).scale(0.8).layout().unwrap();
        let radii: Vec<f64> = layout.petals.iter().map(|p| p.radius).collect();
        assert_eq!(radii[1], 0.8);
        for r in radii {
            assert!(r <= 0.8);
        }
    }

    #[test]
    fn area_mode_example_radii() {
        // area1 = [1,2,3,4], scale 0.8: bin 3 reaches 0.8, bin 0 reaches
        // 0.8 * sqrt(1)/sqrt(4) = 0.4
        let layout = Rose::new([1.0, 2.0, 3.0, 4.0]).scale(0.8).layout().unwrap();
        assert!((layout.petals[0].radius - 0.4).abs() < EPS);
        assert!((layout.petals[3].radius - 0.8).abs() < EPS);
    }

    #[test]
    fn length_mode_radii_are_linear() {
        let layout = Rose::new([1.0, 2.0, 4.0])
            .length_proportional(true)
            .scale(0.8)
            .layout()
            .unwrap();
        assert!((layout.petals[0].radius - 0.2).abs() < EPS);
        assert!((layout.petals[1].radius - 0.4).abs() < EPS);
        assert!((layout.petals[2].radius - 0.8).abs() < EPS);
    }

    #[test]
    fn area_transform_is_monotonic() {
        let a = transform(1.0, false);
        let b = transform(2.0, false);
        let c = transform(3.5, false);
        assert!(a < b && b < c);
    }

    #[test]
    fn shared_normalization_across_series() {
        // Secondary carries the maximum, so the primary's largest wedge
        // stays below the scale
        let layout = Rose::new([1.0, 2.0])
            .comparison([8.0, 1.0])
            .scale(0.5)
            .layout()
            .unwrap();
        let secondary_max = layout
            .secondary_petals()
            .map(|p| p.radius)
            .fold(0.0_f64, f64::max);
        assert_eq!(secondary_max, 0.5);
        for p in layout.primary_petals() {
            assert!(p.radius < 0.5);
        }
    }

    // ==================== angles ====================

    #[test]
    fn first_bin_starts_at_twelve_oclock() {
        let layout = Rose::new([1.0, 1.0, 1.0, 1.0])
            .clockwise(false)
            .layout()
            .unwrap();
        let arc = arc_vertices(&layout.petals[0]);
        assert!((angle_of(arc[0]) - FRAC_PI_2).abs() < 1e-9);
        // Counter-clockwise, so the bin ends a quarter turn later
        assert!((angle_of(arc[arc.len() - 1]) - PI).abs() < 1e-9);
    }

    #[test]
    fn clockwise_mirrors_geometry_but_preserves_radii() {
        let ccw = Rose::new([1.0, 2.0, 3.0]).clockwise(false).layout().unwrap();
        let cw = Rose::new([1.0, 2.0, 3.0]).clockwise(true).layout().unwrap();
        for (a, b) in ccw.petals.iter().zip(cw.petals.iter()) {
            assert_eq!(a.bin, b.bin);
            assert!((a.radius - b.radius).abs() < EPS);
            // Mirror across the vertical axis: x negates, y is preserved
            for (va, vb) in a.vertices.iter().zip(b.vertices.iter()) {
                assert!((va.x + vb.x).abs() < 1e-9);
                assert!((va.y - vb.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn two_series_halves_are_disjoint_and_cover_the_bin() {
        let layout = Rose::new([1.0, 1.0])
            .comparison([1.0, 1.0])
            .clockwise(false)
            .layout()
            .unwrap();
        // Bin 0 spans angles [pi/2, 3pi/2); primary takes the first half
        let primary = &layout.petals[0];
        let secondary = layout
            .secondary_petals()
            .find(|p| p.bin == 0)
            .unwrap();
        for v in arc_vertices(primary) {
            let a = angle_of(*v);
            assert!(a >= FRAC_PI_2 - 1e-9 && a <= PI + 1e-9);
        }
        for v in arc_vertices(secondary) {
            let a = angle_of(*v);
            assert!(a >= PI - 1e-9 && a <= 3.0 * FRAC_PI_2 + 1e-9);
        }
    }

    #[test]
    fn full_bin_uses_all_arc_samples_and_split_bins_half() {
        let single = Rose::new([1.0, 2.0]).layout().unwrap();
        assert_eq!(single.petals[0].vertices.len(), defaults::ARC_SAMPLES + 2);

        let double = Rose::new([1.0, 2.0]).comparison([2.0, 1.0]).layout().unwrap();
        assert_eq!(
            double.petals[0].vertices.len(),
            defaults::ARC_SAMPLES / 2 + 2
        );
    }

    #[test]
    fn petal_edges_stop_at_the_center_inset() {
        let layout = Rose::new([5.0, 1.0]).center_inset(0.05).layout().unwrap();
        for petal in &layout.petals {
            let first = petal.vertices.first().unwrap();
            let last = petal.vertices.last().unwrap();
            assert!((first.length() - 0.05).abs() < EPS);
            assert!((last.length() - 0.05).abs() < EPS);
        }
    }

    #[test]
    fn explicit_bins_narrow_the_wedges() {
        let layout = Rose::new([1.0, 1.0, 1.0])
            .bins(6)
            .clockwise(false)
            .layout()
            .unwrap();
        assert_eq!(layout.petals.len(), 3);
        let arc = arc_vertices(&layout.petals[0]);
        let span = angle_of(arc[arc.len() - 1]) - angle_of(arc[0]);
        assert!((span - TAU / 6.0).abs() < 1e-9);
    }

    // ==================== spokes ====================

    #[test]
    fn spokes_scale_by_their_own_maximum() {
        let layout = Rose::new([1.0, 2.0, 3.0, 4.0])
            .spokes([0.5, 1.0, 0.25, 0.75])
            .scale(0.8)
            .layout()
            .unwrap();
        assert_eq!(layout.spokes.len(), 4);
        let lengths: Vec<f64> = layout.spokes.iter().map(|s| s.to.length()).collect();
        assert!((lengths[1] - 0.8).abs() < EPS);
        assert!((lengths[0] - 0.4).abs() < EPS);
    }

    #[test]
    fn spokes_run_along_the_bisector_from_the_inset() {
        let layout = Rose::new([1.0, 1.0, 1.0, 1.0])
            .spokes([1.0, 1.0, 1.0, 1.0])
            .clockwise(false)
            .center_inset(0.03)
            .layout()
            .unwrap();
        let spoke = &layout.spokes[0];
        // Bisector of bin 0 of 4, counter-clockwise: pi/2 + pi/4
        let expected = FRAC_PI_2 + FRAC_PI_2 / 2.0;
        assert!((angle_of(spoke.to) - expected).abs() < 1e-9);
        assert!((spoke.from.length() - 0.03).abs() < EPS);
    }

    // ==================== separators ====================

    #[test]
    fn separators_sit_on_bin_boundaries() {
        let layout = Rose::new([1.0, 1.0, 1.0])
            .separators(true)
            .clockwise(false)
            .layout()
            .unwrap();
        assert_eq!(layout.separators.len(), 3);
        for (k, sep) in layout.separators.iter().enumerate() {
            let expected = (FRAC_PI_2 + TAU * k as f64 / 3.0).rem_euclid(TAU);
            assert!((angle_of(sep.to) - expected).abs() < 1e-9);
            assert!((sep.to.length() - 1.0).abs() < EPS);
            assert!((sep.from.length() - defaults::CENTER_INSET).abs() < EPS);
        }
    }

    #[test]
    fn separators_are_off_by_default() {
        let layout = Rose::new([1.0, 2.0]).layout().unwrap();
        assert!(layout.separators.is_empty());
    }

    // ==================== labels ====================

    #[test]
    fn labels_carry_formatted_stats_by_default() {
        let layout = Rose::new([1.0, 2.25])
            .labels(["a", "b"])
            .layout()
            .unwrap();
        assert_eq!(layout.labels.len(), 2);
        assert_eq!(layout.labels[0].text, "a");
        assert_eq!(layout.labels[0].stat.as_deref(), Some("1.0"));
        assert_eq!(layout.labels[1].stat.as_deref(), Some("2.2"));
        for label in &layout.labels {
            assert!((label.at.length() - defaults::LABEL_STAT_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn labels_without_stats_move_outward() {
        let layout = Rose::new([1.0, 2.0])
            .labels(["a", "b"])
            .stats(false)
            .layout()
            .unwrap();
        for label in &layout.labels {
            assert!(label.stat.is_none());
            assert!((label.at.length() - defaults::LABEL_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn stat_precision_follows_decimal_places() {
        let layout = Rose::new([1.2345])
            .labels(["x"])
            .decimal_places(3)
            .layout()
            .unwrap();
        assert_eq!(layout.labels[0].stat.as_deref(), Some("1.234"));
    }

    #[test]
    fn no_label_vector_means_no_anchors() {
        let layout = Rose::new([1.0, 2.0]).layout().unwrap();
        assert!(layout.labels.is_empty());
    }

    // ==================== rejection policy ====================

    #[test]
    fn empty_series_is_rejected() {
        let err = Rose::new(Vec::new()).layout().unwrap_err();
        assert!(matches!(err, LayoutError::EmptySeries));
    }

    #[test]
    fn all_zero_magnitudes_are_rejected() {
        let err = Rose::new([0.0, 0.0, 0.0]).layout().unwrap_err();
        assert!(matches!(err, LayoutError::AllZeroMagnitudes));
    }

    #[test]
    fn negative_magnitude_is_rejected_with_position() {
        let err = Rose::new([1.0, -2.0]).layout().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::NegativeMagnitude {
                series: SeriesId::Primary,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn nan_magnitude_is_rejected() {
        let err = Rose::new([1.0, f64::NAN]).layout().unwrap_err();
        assert!(matches!(err, LayoutError::NonFiniteMagnitude { .. }));
    }

    #[test]
    fn all_zero_spokes_are_rejected() {
        let err = Rose::new([1.0, 2.0])
            .spokes([0.0, 0.0])
            .layout()
            .unwrap_err();
        assert!(matches!(err, LayoutError::AllZeroSpokes));
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        let err = Rose::new([1.0, 2.0]).scale(f64::NAN).layout().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::NonFiniteOption { option: "scale" }
        ));
    }

    #[test]
    fn out_of_band_scale_is_accepted() {
        // Values outside (0, 1] just change visual size
        let big = Rose::new([1.0, 2.0]).scale(1.6).layout().unwrap();
        let max = big.petals.iter().map(|p| p.radius).fold(0.0_f64, f64::max);
        assert!((max - 1.6).abs() < EPS);
    }
}
