//! Four box wipe: four growing rectangles, one per canvas quadrant.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::{FillRule, PaintContext};
use crate::transitions::check_inputs;

/// Where the four boxes are anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FourBoxMode {
    /// Boxes pinned to the four canvas corners, growing inward.
    CornersIn,
    /// Boxes centered on the four quadrant centers, growing outward.
    CornersOut,
}

/// Each box is `(w*p/2) x (h*p/2)`. `CornersIn` anchors them at the corners;
/// `CornersOut` centers them in their quadrants (offset `(quadrant - box)/2`
/// from the quadrant edge, mirrored into the other quadrants by reflection).
/// The boxes stay inside their quadrants, so they are pairwise disjoint for
/// every p and tile the canvas exactly at p=1.
pub fn render<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    mode: FourBoxMode,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());

    cr.set_source(from, 0, 0);
    cr.paint()?;

    let bw = w * progress / 2.0;
    let bh = h * progress / 2.0;
    let (x, y) = match mode {
        FourBoxMode::CornersIn => (0.0, 0.0),
        FourBoxMode::CornersOut => ((w / 2.0 - bw) / 2.0, (h / 2.0 - bh) / 2.0),
    };
    // The other three boxes are the reflections (w-bw-x, h-bh-y).
    let xs = [x, w - bw - x];
    let ys = [y, h - bh - y];
    for &by in &ys {
        for &bx in &xs {
            cr.rect(bx, by, bw, bh);
        }
    }
    cr.clip(FillRule::NonZero);
    cr.set_source(to, 0, 0);
    cr.paint()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: [u8; 4] = [255, 0, 0, 255];
    const TO: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn boundary_progress_is_exact() {
        for mode in [FourBoxMode::CornersIn, FourBoxMode::CornersOut] {
            for (w, h) in [(8u32, 6u32), (7, 9)] {
                let from = Frame::solid(w, h, FROM).unwrap();
                let to = Frame::solid(w, h, TO).unwrap();

                let mut target = Frame::new(w, h).unwrap();
                let mut cr = PaintContext::new(&mut target);
                render(&mut cr, &from, &to, 0.0, mode).unwrap();
                assert_eq!(target, from, "{mode:?} {w}x{h} at p=0");

                let mut target = Frame::new(w, h).unwrap();
                let mut cr = PaintContext::new(&mut target);
                render(&mut cr, &from, &to, 1.0, mode).unwrap();
                assert_eq!(target, to, "{mode:?} {w}x{h} at p=1");
            }
        }
    }

    #[test]
    fn corners_in_boxes_sit_at_the_corners() {
        let (w, h) = (8u32, 8u32);
        let from = Frame::solid(w, h, FROM).unwrap();
        let to = Frame::solid(w, h, TO).unwrap();
        let mut target = Frame::new(w, h).unwrap();
        let mut cr = PaintContext::new(&mut target);
        render(&mut cr, &from, &to, 0.5, FourBoxMode::CornersIn).unwrap();
        // Boxes are 2x2 at each corner.
        for (x, y) in [(0u32, 0u32), (7, 0), (0, 7), (7, 7), (1, 1), (6, 6)] {
            assert_eq!(target.pixel(x, y), TO, "corner region ({x}, {y})");
        }
        for (x, y) in [(3, 3), (4, 4), (2, 0), (0, 2), (5, 7), (7, 5)] {
            assert_eq!(target.pixel(x, y), FROM, "center region ({x}, {y})");
        }
    }

    #[test]
    fn corners_out_boxes_are_quadrant_centered() {
        let (w, h) = (8u32, 8u32);
        let from = Frame::solid(w, h, FROM).unwrap();
        let to = Frame::solid(w, h, TO).unwrap();
        let mut target = Frame::new(w, h).unwrap();
        let mut cr = PaintContext::new(&mut target);
        render(&mut cr, &from, &to, 0.5, FourBoxMode::CornersOut).unwrap();
        // 2x2 boxes centered in each 4x4 quadrant: offset (4-2)/2 = 1.
        for (x, y) in [(1u32, 1u32), (2, 2), (5, 1), (6, 2), (1, 5), (6, 6)] {
            assert_eq!(target.pixel(x, y), TO, "box pixel ({x}, {y})");
        }
        for (x, y) in [(0, 0), (3, 3), (4, 4), (7, 7), (0, 7), (7, 0)] {
            assert_eq!(target.pixel(x, y), FROM, "outside pixel ({x}, {y})");
        }
    }

    #[test]
    fn boxes_stay_disjoint_and_in_bounds() {
        // Disjointness shows as revealed area == 4 * box area at alignment
        // points, for both modes.
        let (w, h) = (16u32, 16u32);
        let from = Frame::solid(w, h, [0, 0, 0, 255]).unwrap();
        let to = Frame::solid(w, h, [255, 255, 255, 255]).unwrap();
        for mode in [FourBoxMode::CornersIn, FourBoxMode::CornersOut] {
            for step in [0.25, 0.5, 0.75, 1.0] {
                let mut target = Frame::new(w, h).unwrap();
                let mut cr = PaintContext::new(&mut target);
                render(&mut cr, &from, &to, step, mode).unwrap();
                let revealed = target
                    .data()
                    .chunks_exact(4)
                    .filter(|px| px[0] == 255)
                    .count();
                let bw = (f64::from(w) * step / 2.0) as usize;
                let bh = (f64::from(h) * step / 2.0) as usize;
                assert_eq!(revealed, 4 * bw * bh, "{mode:?} at p={step}");
            }
        }
    }
}
