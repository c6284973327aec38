//! Barn door wipe: a band opens outward from the canvas center line.

use crate::foundation::core::{Frame, Point};
use crate::foundation::error::GlissadeResult;
use crate::render::context::{FillRule, PaintContext};
use crate::transitions::check_inputs;

/// Orientation of the opening band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BarnDoorVariant {
    /// Doors split along the vertical center line; the band grows
    /// horizontally.
    Vertical,
    /// Doors split along the horizontal center line.
    Horizontal,
    /// Band along the bottom-left-to-top-right diagonal.
    DiagonalBottomLeft,
    /// Band along the top-left-to-bottom-right diagonal.
    DiagonalTopLeft,
}

/// The band is a rectangle centered on the canvas midpoint: half-width
/// `dim*p/2` along the wipe axis, half-height `diag/2` so the rotated band
/// always spans the canvas end to end. `dim` is the canvas extent along the
/// wipe axis (width, height, or the diagonal length); full coverage at p=1
/// holds because no interior point is farther than `diag/2` from the center
/// line.
pub fn render<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    variant: BarnDoorVariant,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());
    let diag = w.hypot(h);

    cr.set_source(from, 0, 0);
    cr.paint()?;

    let (dim, angle) = match variant {
        BarnDoorVariant::Vertical => (w, 0.0),
        BarnDoorVariant::Horizontal => (h, std::f64::consts::FRAC_PI_2),
        BarnDoorVariant::DiagonalBottomLeft => (diag, w.atan2(h)),
        BarnDoorVariant::DiagonalTopLeft => (diag, w.atan2(-h)),
    };

    cr.rotate(angle);
    let center = cr.device_to_user(Point::new(w / 2.0, h / 2.0));
    let half_w = dim * progress / 2.0;
    let half_h = diag / 2.0;
    cr.rect(center.x - half_w, center.y - half_h, half_w * 2.0, half_h * 2.0);
    cr.clip(FillRule::NonZero);
    cr.set_source(to, 0, 0);
    cr.paint()
}
