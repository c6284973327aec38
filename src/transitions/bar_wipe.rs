//! Bar wipe: a rectangle reveals the destination from one canvas edge.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::{FillRule, PaintContext};
use crate::transitions::check_inputs;

/// Edge the reveal rectangle grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BarWipeDir {
    Left,
    Top,
    Right,
    Bottom,
}

/// At progress p the revealed region is the rectangle of width `w*p`
/// (resp. height `h*p`) anchored at the wipe edge; for `Right`/`Bottom` it is
/// offset by `1-p` from the far edge.
pub fn render<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    dir: BarWipeDir,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let w = f64::from(cr.width());
    let h = f64::from(cr.height());

    cr.set_source(from, 0, 0);
    cr.paint()?;

    let (x, y, bw, bh) = match dir {
        BarWipeDir::Left => (0.0, 0.0, w * progress, h),
        BarWipeDir::Top => (0.0, 0.0, w, h * progress),
        BarWipeDir::Right => (w * (1.0 - progress), 0.0, w * progress, h),
        BarWipeDir::Bottom => (0.0, h * (1.0 - progress), w, h * progress),
    };
    cr.rect(x, y, bw, bh);
    cr.clip(FillRule::NonZero);
    cr.set_source(to, 0, 0);
    cr.paint()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: [u8; 4] = [255, 0, 0, 255];
    const TO: [u8; 4] = [0, 0, 255, 255];

    fn frames(w: u32, h: u32) -> (Frame, Frame, Frame) {
        (
            Frame::new(w, h).unwrap(),
            Frame::solid(w, h, FROM).unwrap(),
            Frame::solid(w, h, TO).unwrap(),
        )
    }

    #[test]
    fn left_quarter_reveals_exactly_two_columns() {
        let (mut target, from, to) = frames(8, 4);
        let mut cr = PaintContext::new(&mut target);
        render(&mut cr, &from, &to, 0.25, BarWipeDir::Left).unwrap();
        for y in 0..4 {
            for x in 0..8 {
                let want = if x < 2 { TO } else { FROM };
                assert_eq!(target.pixel(x, y), want, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn right_grows_from_far_edge() {
        let (mut target, from, to) = frames(8, 2);
        let mut cr = PaintContext::new(&mut target);
        render(&mut cr, &from, &to, 0.5, BarWipeDir::Right).unwrap();
        for x in 0..8 {
            let want = if x >= 4 { TO } else { FROM };
            assert_eq!(target.pixel(x, 0), want, "pixel ({x}, 0)");
        }
    }

    #[test]
    fn bottom_grows_from_far_edge() {
        let (mut target, from, to) = frames(2, 8);
        let mut cr = PaintContext::new(&mut target);
        render(&mut cr, &from, &to, 0.25, BarWipeDir::Bottom).unwrap();
        for y in 0..8 {
            let want = if y >= 6 { TO } else { FROM };
            assert_eq!(target.pixel(0, y), want, "pixel (0, {y})");
        }
    }

    #[test]
    fn rejects_mismatched_frames() {
        let mut target = Frame::new(4, 4).unwrap();
        let from = Frame::new(4, 4).unwrap();
        let to = Frame::new(4, 3).unwrap();
        let mut cr = PaintContext::new(&mut target);
        assert!(render(&mut cr, &from, &to, 0.5, BarWipeDir::Left).is_err());
    }

    #[test]
    fn rejects_out_of_range_progress() {
        let (mut target, from, to) = frames(2, 2);
        let mut cr = PaintContext::new(&mut target);
        assert!(render(&mut cr, &from, &to, 1.5, BarWipeDir::Left).is_err());
        let mut cr = PaintContext::new(&mut target);
        assert!(render(&mut cr, &from, &to, f64::NAN, BarWipeDir::Left).is_err());
    }
}
