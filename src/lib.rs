//! Rose/petal (coxcomb) diagram layout and SVG rendering.
//!
//! A coxcomb divides a circle into equal angular bins and draws one rounded
//! "petal" wedge per magnitude, with the petal's area (or, optionally, its
//! radius) proportional to the value. A second series overlays as half-width
//! petals, per-bin uncertainty values become spokes, and labels with
//! formatted statistics sit near the rim.
//!
//! The crate is split into a pure layout engine ([`Rose::layout`]) that
//! produces polygons, segments and anchors in unit-circle coordinates, and a
//! rendering stage over the swappable [`Surface`] trait, with an SVG backend
//! built in.
//!
//! ```
//! use coxcomb::Rose;
//!
//! let svg = Rose::new([4.0, 7.0, 2.0, 9.0])
//!     .labels(["N", "E", "S", "W"])
//!     .to_svg(480, 480)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod chart;
pub mod defaults;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;
pub mod types;

pub use chart::Rose;
pub use errors::{LayoutError, LayoutWarning, SeriesId};
pub use layout::{BinLabel, Petal, RoseLayout, Separator, SeriesSlot, Spoke};
pub use render::{DrawParams, PaintStyle, Surface, SvgSurface, TextAnchor, TextStyle};
pub use types::{Color, Frame, NumericError, Scalar};
