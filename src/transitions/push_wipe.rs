//! Push wipe: the destination slides in while the source slides out.
//!
//! No clipping is involved. Both layers are painted at offsets linear in
//! progress; the offsets are rounded once to whole pixels so the two layers
//! always tile the canvas exactly, with the seam on a single pixel column or
//! row.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::PaintContext;
use crate::transitions::check_inputs;

/// Edge the destination image enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PushWipeDir {
    FromLeft,
    FromTop,
    FromRight,
    FromBottom,
}

/// Paint the incoming back layer (`to`) and then the outgoing front layer
/// (`from`), each translated along the push axis. At p=0 `from` covers the
/// canvas; at p=1 `to` does.
pub fn render<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    dir: PushWipeDir,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = i32::try_from(cr.width()).unwrap_or(i32::MAX);
    let h = i32::try_from(cr.height()).unwrap_or(i32::MAX);

    let ((to_dx, to_dy), (from_dx, from_dy)) = match dir {
        PushWipeDir::FromLeft => {
            let d = (f64::from(w) * progress).round() as i32;
            ((d - w, 0), (d, 0))
        }
        PushWipeDir::FromRight => {
            let d = (f64::from(w) * progress).round() as i32;
            ((w - d, 0), (-d, 0))
        }
        PushWipeDir::FromTop => {
            let d = (f64::from(h) * progress).round() as i32;
            ((0, d - h), (0, d))
        }
        PushWipeDir::FromBottom => {
            let d = (f64::from(h) * progress).round() as i32;
            ((0, h - d), (0, -d))
        }
    };

    cr.set_source(to, to_dx, to_dy);
    cr.paint()?;
    cr.set_source(from, from_dx, from_dy);
    cr.paint()
}
