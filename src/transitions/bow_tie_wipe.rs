//! Bow tie wipe: two wedges sweep in from opposite edges.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::{FillRule, PaintContext};
use crate::transitions::check_inputs;

/// Axis the two wedges sweep along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BowTieOrientation {
    /// Bases on the top and bottom edges.
    Vertical,
    /// Bases on the left and right edges.
    Horizontal,
}

/// Each triangle has its base on one edge, spanning `tmp*(1-2p)` to
/// `tmp*(1+2p)` around the edge midpoint (`tmp` = half the canvas extent
/// along the base axis), and its apex at the opposite edge's midpoint. Both
/// triangles are wound the same way and filled with non-zero winding so their
/// overlap stays filled; together they cover the canvas exactly at p=1.
pub fn render<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    orientation: BowTieOrientation,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());

    cr.set_source(from, 0, 0);
    cr.paint()?;

    match orientation {
        BowTieOrientation::Vertical => {
            let tmp = w / 2.0;
            let a = tmp * (1.0 - 2.0 * progress);
            let b = tmp * (1.0 + 2.0 * progress);
            cr.move_to(a, 0.0);
            cr.line_to(b, 0.0);
            cr.line_to(w / 2.0, h);
            cr.close_path();
            cr.move_to(b, h);
            cr.line_to(a, h);
            cr.line_to(w / 2.0, 0.0);
            cr.close_path();
        }
        BowTieOrientation::Horizontal => {
            let tmp = h / 2.0;
            let a = tmp * (1.0 - 2.0 * progress);
            let b = tmp * (1.0 + 2.0 * progress);
            cr.move_to(0.0, b);
            cr.line_to(0.0, a);
            cr.line_to(w, h / 2.0);
            cr.close_path();
            cr.move_to(w, a);
            cr.line_to(w, b);
            cr.line_to(0.0, h / 2.0);
            cr.close_path();
        }
    }
    cr.set_source(to, 0, 0);
    cr.fill(FillRule::NonZero)
}
