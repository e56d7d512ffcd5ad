//! Scoped drawing parameters.
//!
//! Styling state lives in a thread-local table, reachable only through an
//! RAII guard: `DrawParams::scoped` snapshots the table, applies overrides,
//! and the guard restores the snapshot when it drops, on every exit path
//! including panics.

use std::cell::RefCell;

use crate::defaults;
use crate::types::Color;

/// The drawing/styling parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    /// Viewport background; `Color::None` leaves it transparent
    pub background: Color,
    /// Outline color for petals, spokes and separators
    pub stroke: Color,
    /// Outline width in pixels
    pub stroke_width: f64,
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    pub text_color: Color,
    /// Fraction of the unit radius reserved outside the rim
    pub margin: f64,
}

impl Default for DrawParams {
    fn default() -> Self {
        DrawParams {
            background: Color::None,
            stroke: Color::Named("black".to_string()),
            stroke_width: defaults::STROKE_WIDTH,
            font_family: defaults::FONT_FAMILY.to_string(),
            font_size: defaults::FONT_SIZE,
            text_color: Color::Named("black".to_string()),
            margin: defaults::BARE_MARGIN,
        }
    }
}

thread_local! {
    static CURRENT: RefCell<DrawParams> = RefCell::new(DrawParams::default());
}

impl DrawParams {
    /// Snapshot of the current table.
    pub fn current() -> DrawParams {
        CURRENT.with(|c| c.borrow().clone())
    }

    /// Apply overrides for the lifetime of the returned guard. The previous
    /// table comes back when the guard drops.
    pub fn scoped(apply: impl FnOnce(&mut DrawParams)) -> ParamsGuard {
        let saved = CURRENT.with(|c| {
            let mut current = c.borrow_mut();
            let saved = current.clone();
            apply(&mut current);
            saved
        });
        ParamsGuard { saved: Some(saved) }
    }
}

/// Restores the snapshotted parameter table on drop.
#[must_use = "dropping the guard immediately would restore the previous parameters"]
pub struct ParamsGuard {
    saved: Option<DrawParams>,
}

impl Drop for ParamsGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            CURRENT.with(|c| *c.borrow_mut() = saved);
        }
    }
}
