//! SVG generation by direct string construction.

use glam::DVec2;

use super::params::DrawParams;
use super::surface::{PaintStyle, Surface, TextAnchor, TextStyle};

/// SVG backend for the `Surface` trait. Collects elements into a body
/// string; `finish` wraps them in the document envelope.
pub struct SvgSurface {
    width: f64,
    height: f64,
    font_family: String,
    body: String,
}

impl SvgSurface {
    /// Create a surface for a `width` x `height` pixel viewport. The
    /// background and font come from the current drawing parameters.
    pub fn new(width: f64, height: f64) -> Self {
        let params = DrawParams::current();
        let mut body = String::new();
        if !params.background.is_none() {
            body.push_str(&format!(
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                params.background.to_rgb_string()
            ));
        }
        SvgSurface {
            width,
            height,
            font_family: params.font_family,
            body,
        }
    }

    /// Finish the document and return the SVG string.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            fmt_num(self.width),
            fmt_num(self.height),
            self.body
        )
    }
}

impl Surface for SvgSurface {
    fn polygon(&mut self, points: &[DVec2], style: &PaintStyle) {
        let mut attr = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                attr.push(' ');
            }
            attr.push_str(&format!("{},{}", fmt_num(p.x), fmt_num(p.y)));
        }
        self.body.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            attr,
            style.fill.to_rgb_string(),
            style.stroke.to_rgb_string(),
            fmt_num(style.stroke_width)
        ));
    }

    fn line(&mut self, from: DVec2, to: DVec2, style: &PaintStyle) {
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            style.stroke.to_rgb_string(),
            fmt_num(style.stroke_width)
        ));
    }

    fn text(&mut self, at: DVec2, content: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" \
             text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>\n",
            fmt_num(at.x),
            fmt_num(at.y),
            style.color.to_rgb_string(),
            self.font_family,
            fmt_num(style.size),
            anchor,
            escape_xml(content)
        ));
    }
}

/// Format a number like C's %g (6 significant figures, trailing zeros
/// trimmed), keeping the output compact and stable.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sig_figs = 6_i32;
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

/// Escape text content for XML
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
