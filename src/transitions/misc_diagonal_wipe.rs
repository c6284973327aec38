//! Diagonal compound wipes: double barn door and double diamond.
//!
//! Both are fixed polygon formulas over the canvas half-extents; the vertex
//! tables are reproduced as-is rather than derived.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::{FillRule, PaintContext};
use crate::transitions::check_inputs;

/// Two barn doors opening along both diagonals at once.
///
/// The reveal region is one closed 16-vertex pinwheel polygon: the four
/// corner arms widen with progress while the four edge-midpoint notches
/// retreat from the center to the edges. Degenerates to the bare diagonals
/// (zero area) at p=0 and to the full canvas at p=1.
pub fn render_double_barn_door<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());
    let w2 = w / 2.0;
    let h2 = h / 2.0;
    let t = progress;

    cr.set_source(from, 0, 0);
    cr.paint()?;

    cr.move_to(0.0, 0.0);
    cr.line_to(t * w2, 0.0);
    cr.line_to(w2, (1.0 - t) * h2);
    cr.line_to((2.0 - t) * w2, 0.0);
    cr.line_to(w, 0.0);
    cr.line_to(w, t * h2);
    cr.line_to((1.0 + t) * w2, h2);
    cr.line_to(w, (2.0 - t) * h2);
    cr.line_to(w, h);
    cr.line_to((2.0 - t) * w2, h);
    cr.line_to(w2, (1.0 + t) * h2);
    cr.line_to(t * w2, h);
    cr.line_to(0.0, h);
    cr.line_to(0.0, (2.0 - t) * h2);
    cr.line_to((1.0 - t) * w2, h2);
    cr.line_to(0.0, t * h2);
    cr.close_path();

    cr.set_source(to, 0, 0);
    cr.fill(FillRule::NonZero)
}

/// A diamond-shaped reveal ring, via even-odd subtraction of two sub-paths:
/// an outer octagon growing from the inscribed diamond to the full canvas,
/// and an inner diamond shrinking from the inscribed diamond to the center.
/// The ring area is `w*h*(1-(1-p)^2)`: empty at p=0, full at p=1.
pub fn render_double_diamond<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());
    let w2 = w / 2.0;
    let h2 = h / 2.0;
    let t = progress;

    cr.set_source(from, 0, 0);
    cr.paint()?;

    // Outer octagon: edge-midpoint offsets scaled by (1 +/- t).
    cr.move_to((1.0 - t) * w2, 0.0);
    cr.line_to((1.0 + t) * w2, 0.0);
    cr.line_to(w, (1.0 - t) * h2);
    cr.line_to(w, (1.0 + t) * h2);
    cr.line_to((1.0 + t) * w2, h);
    cr.line_to((1.0 - t) * w2, h);
    cr.line_to(0.0, (1.0 + t) * h2);
    cr.line_to(0.0, (1.0 - t) * h2);
    cr.close_path();

    // Inner diamond: edge midpoints pulled toward the center by t.
    cr.move_to(w2, t * h2);
    cr.line_to((2.0 - t) * w2, h2);
    cr.line_to(w2, (2.0 - t) * h2);
    cr.line_to(t * w2, h2);
    cr.close_path();

    cr.set_source(to, 0, 0);
    cr.fill(FillRule::EvenOdd)
}
