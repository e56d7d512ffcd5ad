//! Legend drawing through the surface: one swatch + text entry per series,
//! stacked in the top-left corner of the viewport.

use glam::dvec2;

use crate::defaults;
use crate::types::Color;

use super::params::DrawParams;
use super::surface::{PaintStyle, Surface, TextAnchor, TextStyle};

pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

pub fn draw_legend<S: Surface>(surface: &mut S, entries: &[LegendEntry]) {
    let params = DrawParams::current();
    let swatch = defaults::LEGEND_SWATCH;
    let pad = defaults::LEGEND_PAD;
    let gap = defaults::LEGEND_GAP;

    for (i, entry) in entries.iter().enumerate() {
        let top = pad + i as f64 * (swatch + gap);
        let corners = [
            dvec2(pad, top),
            dvec2(pad + swatch, top),
            dvec2(pad + swatch, top + swatch),
            dvec2(pad, top + swatch),
        ];
        surface.polygon(
            &corners,
            &PaintStyle {
                fill: entry.color.clone(),
                stroke: params.stroke.clone(),
                stroke_width: params.stroke_width,
            },
        );
        surface.text(
            dvec2(pad + swatch + gap, top + swatch / 2.0),
            &entry.label,
            &TextStyle {
                color: params.text_color.clone(),
                size: params.font_size,
                anchor: TextAnchor::Start,
            },
        );
    }
}
