//! Error types with rich diagnostics using miette
//!
//! Malformed magnitude input is rejected with a typed error instead of
//! silently producing non-finite geometry. Mismatched series lengths are the
//! one recoverable condition: they become warnings on the layout result.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Which input series a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesId {
    Primary,
    Secondary,
    Spokes,
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesId::Primary => write!(f, "primary series"),
            SeriesId::Secondary => write!(f, "comparison series"),
            SeriesId::Spokes => write!(f, "spoke series"),
        }
    }
}

/// Errors that occur during wedge layout
#[derive(Error, Diagnostic, Debug)]
pub enum LayoutError {
    #[error("primary series is empty")]
    #[diagnostic(
        code(coxcomb::layout::empty_series),
        help("at least one magnitude is required to divide the circle into bins")
    )]
    EmptySeries,

    #[error("{series} has a NaN or infinite magnitude at index {index}")]
    #[diagnostic(code(coxcomb::layout::non_finite_magnitude))]
    NonFiniteMagnitude { series: SeriesId, index: usize },

    #[error("{series} has a negative magnitude at index {index}: {value}")]
    #[diagnostic(
        code(coxcomb::layout::negative_magnitude),
        help("magnitudes are areas/lengths and must be non-negative")
    )]
    NegativeMagnitude {
        series: SeriesId,
        index: usize,
        value: f64,
    },

    #[error("every wedge magnitude is zero")]
    #[diagnostic(
        code(coxcomb::layout::all_zero_magnitudes),
        help("wedge radii are normalized by the maximum magnitude, which must be positive")
    )]
    AllZeroMagnitudes,

    #[error("every spoke magnitude is zero")]
    #[diagnostic(
        code(coxcomb::layout::all_zero_spokes),
        help("spokes scale independently by their own maximum, which must be positive")
    )]
    AllZeroSpokes,

    #[error("option `{option}` is NaN or infinite")]
    #[diagnostic(code(coxcomb::layout::non_finite_option))]
    NonFiniteOption { option: &'static str },
}

/// Recoverable layout conditions, surfaced on the result and logged.
/// Layout proceeds best-effort when one of these occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWarning {
    /// The comparison series length differs from the primary; both are still
    /// laid out using their own lengths.
    SeriesLengthMismatch { primary: usize, secondary: usize },
    /// The spoke series length differs from the primary; spokes are still
    /// laid out using their own length.
    SpokeLengthMismatch { primary: usize, spokes: usize },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::SeriesLengthMismatch { primary, secondary } => write!(
                f,
                "comparison series length {} does not match primary length {}; \
                 each series is laid out with its own bin count",
                secondary, primary
            ),
            LayoutWarning::SpokeLengthMismatch { primary, spokes } => write!(
                f,
                "spoke series length {} does not match primary length {}; \
                 spokes are laid out with their own bin count",
                spokes, primary
            ),
        }
    }
}
