//! The drawing surface seam.
//!
//! Rendering walks the layout and calls these three primitives, so backends
//! are swappable and the geometry stays testable without one.

use glam::DVec2;

use crate::types::Color;

/// Fill and outline for a polygon or line segment
#[derive(Debug, Clone)]
pub struct PaintStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in pixels
    pub size: f64,
    pub anchor: TextAnchor,
}

/// A 2-D drawing surface. All coordinates are in pixels, Y-down.
pub trait Surface {
    /// Draw a closed, filled polygon.
    fn polygon(&mut self, points: &[DVec2], style: &PaintStyle);
    /// Draw a line segment.
    fn line(&mut self, from: DVec2, to: DVec2, style: &PaintStyle);
    /// Draw text anchored at a point, vertically centered on it.
    fn text(&mut self, at: DVec2, content: &str, style: &TextStyle);
}
