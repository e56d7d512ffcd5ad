//! Rendering stage: maps the pure layout into pixel space and draws it
//! through a `Surface` backend.
//!
//! Submodules:
//! - `params`: scoped drawing-parameter table
//! - `surface`: the backend seam (polygon/line/text)
//! - `svg`: the provided SVG backend
//! - `legend`: legend drawing

pub mod legend;
pub mod params;
pub mod surface;
pub mod svg;

pub use params::{DrawParams, ParamsGuard};
pub use surface::{PaintStyle, Surface, TextAnchor, TextStyle};
pub use svg::SvgSurface;

use glam::{DVec2, dvec2};

use crate::chart::Rose;
use crate::defaults;
use crate::layout::{RoseLayout, SeriesSlot};
use crate::types::{Color, Frame};

use legend::LegendEntry;

/// Draw a computed layout onto a surface. Petals first, then separators,
/// spokes, labels and the legend, so later elements stay readable on top.
pub fn render_layout<S: Surface>(
    rose: &Rose,
    layout: &RoseLayout,
    frame: &Frame,
    surface: &mut S,
) {
    let params = DrawParams::current();
    let line_style = PaintStyle {
        fill: Color::None,
        stroke: params.stroke.clone(),
        stroke_width: params.stroke_width,
    };

    for petal in &layout.petals {
        let fill = match petal.slot {
            SeriesSlot::Primary => rose.piece_colors[0].clone(),
            SeriesSlot::Secondary => rose.piece_colors[1].clone(),
        };
        let points: Vec<DVec2> = petal.vertices.iter().map(|&v| frame.to_px(v)).collect();
        surface.polygon(
            &points,
            &PaintStyle {
                fill,
                stroke: params.stroke.clone(),
                stroke_width: params.stroke_width,
            },
        );
    }

    for sep in &layout.separators {
        surface.line(frame.to_px(sep.from), frame.to_px(sep.to), &line_style);
    }

    for spoke in &layout.spokes {
        surface.line(frame.to_px(spoke.from), frame.to_px(spoke.to), &line_style);
    }

    let text_style = TextStyle {
        color: params.text_color.clone(),
        size: params.font_size,
        anchor: TextAnchor::Middle,
    };
    for label in &layout.labels {
        let at = frame.to_px(label.at);
        match &label.stat {
            Some(stat) => {
                // Stack label over statistic, centered on the anchor
                let shift = dvec2(0.0, params.font_size * 0.55);
                surface.text(at - shift, &label.text, &text_style);
                surface.text(at + shift, stat, &text_style);
            }
            None => surface.text(at, &label.text, &text_style),
        }
    }

    if rose.show_legend() {
        let mut entries = vec![LegendEntry {
            color: rose.piece_colors[0].clone(),
            label: rose.legend_labels[0].clone(),
        }];
        if rose.area2.is_some() {
            entries.push(LegendEntry {
                color: rose.piece_colors[1].clone(),
                label: rose.legend_labels[1].clone(),
            });
        }
        legend::draw_legend(surface, &entries);
    }
}

/// Lay out a chart and render it to an SVG document.
pub fn to_svg(rose: &Rose, width: u32, height: u32) -> Result<String, miette::Report> {
    let layout = rose.layout()?;
    for warning in &layout.warnings {
        crate::log::warn!("{}", warning);
    }

    // Reserve rim space for labels while this chart draws; the previous
    // table comes back when the guard drops, on every exit path.
    let _style = DrawParams::scoped(|p| {
        p.margin = if layout.labels.is_empty() {
            defaults::BARE_MARGIN
        } else {
            defaults::LABEL_MARGIN
        };
    });

    let params = DrawParams::current();
    let frame = Frame::fit(width as f64, height as f64, params.margin)
        .map_err(|e| miette::miette!("invalid viewport {}x{}: {}", width, height, e))?;

    let mut surface = SvgSurface::new(width as f64, height as f64);
    render_layout(rose, &layout, &frame, &mut surface);
    crate::log::debug!(width, height, "svg render complete");
    Ok(surface.finish())
}
