//! Strongly-typed primitives for coxcomb (zero-cost newtypes).
//!
//! Design goals:
//! - No unvalidated `f64` crossing the public boundary
//! - Conversions from unit-circle space to pixels only via `Frame`

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Unitless scalar (scale factors, insets, ratios)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);
    pub const ONE: Scalar = Scalar(1.0);

    /// Create a Scalar with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Scalar, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Scalar(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simple color model. Named colors resolve through the same table the
/// SVG backend uses, so `"white"` and `rgb(255,255,255)` are interchangeable.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    /// Transparent / not painted
    None,
    /// Anything we don't recognize, passed through verbatim
    Raw(String),
}

/// Common SVG color names and their rgb values
const NAMED_COLORS: [(&str, (u8, u8, u8)); 18] = [
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
];

impl Color {
    /// Resolve to the `rgb(r,g,b)` / `none` form used in SVG output.
    pub fn to_rgb_string(&self) -> String {
        match self {
            Color::Named(name) => {
                let lower = name.to_lowercase();
                match NAMED_COLORS.iter().find(|(n, _)| *n == lower) {
                    Some((_, (r, g, b))) => format!("rgb({},{},{})", r, g, b),
                    // Unknown name, let the renderer pass it through
                    Option::None => name.clone(),
                }
            }
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::None => "none".to_string(),
            Color::Raw(s) => s.clone(),
        }
    }

    /// True if this color paints nothing
    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        if lower == "none" || lower == "off" {
            return Ok(Color::None);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() == 6 {
                if let Ok(v) = u32::from_str_radix(hex, 16) {
                    return Ok(Color::Rgb(
                        ((v >> 16) & 0xFF) as u8,
                        ((v >> 8) & 0xFF) as u8,
                        (v & 0xFF) as u8,
                    ));
                }
            }
            return Ok(Color::Raw(trimmed.to_string()));
        }
        if NAMED_COLORS.iter().any(|(n, _)| *n == lower) {
            return Ok(Color::Named(lower));
        }
        Ok(Color::Raw(trimmed.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::None => write!(f, "none"),
        }
    }
}

/// Maps unit-circle coordinates (Y-up, radius 1.0 = outer rim) to SVG pixel
/// coordinates (Y-down). The layout engine only ever speaks unit-circle
/// space; this is the single place the flip happens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub center: DVec2,
    pub px_per_unit: f64,
}

impl Frame {
    /// Create a Frame with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(center: DVec2, px_per_unit: f64) -> Result<Self, NumericError> {
        if px_per_unit.is_nan() {
            Err(NumericError::NaN)
        } else if px_per_unit.is_infinite() {
            Err(NumericError::Infinite)
        } else if px_per_unit == 0.0 {
            Err(NumericError::Zero)
        } else if px_per_unit < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Frame { center, px_per_unit })
        }
    }

    /// Fit a unit circle into a `width` x `height` viewport, reserving
    /// `margin` (a fraction of the unit radius) outside the rim for labels.
    pub fn fit(width: f64, height: f64, margin: f64) -> Result<Self, NumericError> {
        let half = width.min(height) / 2.0;
        Frame::try_new(dvec2(width / 2.0, height / 2.0), half / (1.0 + margin))
    }

    /// Convert a unit-circle point to SVG pixels (Y-flipped).
    #[inline]
    pub fn to_px(&self, p: DVec2) -> DVec2 {
        dvec2(
            self.center.x + p.x * self.px_per_unit,
            self.center.y - p.y * self.px_per_unit,
        )
    }

    /// Convert a unit-circle length to pixels.
    #[inline]
    pub fn px(&self, len: f64) -> f64 {
        len * self.px_per_unit
    }
}
