//! The primitive drawing interface the transition renderers call into.
//!
//! [`PaintContext`] is a cairo-style stateful handle onto one output
//! [`Frame`]: paths are built in user space (the current transform is applied
//! as points are added), clips intersect, and paints composite the selected
//! source frame over the target with premultiplied-alpha "over". The context
//! is borrowed for the duration of one render call and never retained.

use crate::foundation::core::{Affine, BezPath, Frame, PixelMask, Point};
use crate::foundation::error::{GlissadeError, GlissadeResult};
use crate::foundation::math::{mul_div255_u8, mul_div255_u16};
use crate::render::raster::rasterize;

/// Fill rule for [`PaintContext::clip`] and [`PaintContext::fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    /// Non-zero winding: same-winding overlaps stay filled.
    NonZero,
    /// Even-odd: overlaps of two sub-paths become holes.
    EvenOdd,
}

#[derive(Clone, Copy)]
struct Source<'a> {
    frame: &'a Frame,
    dx: i32,
    dy: i32,
}

/// A stateful drawing handle onto an output [`Frame`].
pub struct PaintContext<'a> {
    target: &'a mut Frame,
    transform: Affine,
    path: BezPath,
    clip: Option<Vec<u8>>,
    source: Option<Source<'a>>,
}

impl<'a> PaintContext<'a> {
    pub fn new(target: &'a mut Frame) -> Self {
        Self {
            target,
            transform: Affine::IDENTITY,
            path: BezPath::new(),
            clip: None,
            source: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    /// Discard the current path.
    pub fn new_path(&mut self) {
        self.path = BezPath::new();
    }

    /// Begin a new subpath at the user-space point (x, y).
    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = self.transform * Point::new(x, y);
        self.path.move_to(p);
    }

    /// Extend the current subpath with a line. Starts a subpath if none is
    /// open (cairo behavior).
    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = self.transform * Point::new(x, y);
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        self.path.close_path();
    }

    /// Append a closed axis-aligned (in user space) rectangle subpath.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close_path();
    }

    /// Rotate the active transform by `rad` radians (about the user-space
    /// origin).
    pub fn rotate(&mut self, rad: f64) {
        self.transform = self.transform * Affine::rotate(rad);
    }

    /// Translate the active transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate((dx, dy));
    }

    /// Map a device-space point back to user space under the active
    /// transform.
    pub fn device_to_user(&self, p: Point) -> Point {
        self.transform.inverse() * p
    }

    /// Intersect the clip region with the current path under `rule`, then
    /// clear the path (cairo semantics).
    pub fn clip(&mut self, rule: FillRule) {
        let cov = rasterize(&self.path, rule, self.width(), self.height());
        self.intersect_clip(&cov);
        self.path = BezPath::new();
    }

    /// Intersect the clip region with a 1-bit stencil (hard edges, no
    /// antialiasing). The mask must match the target dimensions.
    pub fn clip_mask(&mut self, mask: &PixelMask) -> GlissadeResult<()> {
        if mask.width() != self.width() || mask.height() != self.height() {
            return Err(GlissadeError::validation(format!(
                "clip mask is {}x{}, target is {}x{}",
                mask.width(),
                mask.height(),
                self.width(),
                self.height()
            )));
        }
        let cov: Vec<u8> = (0..mask.len())
            .map(|i| if mask.get(i) { 255 } else { 0 })
            .collect();
        self.intersect_clip(&cov);
        Ok(())
    }

    /// Remove the clip region.
    pub fn reset_clip(&mut self) {
        self.clip = None;
    }

    /// Select `frame` as the paint source, with its origin translated to
    /// device position (dx, dy).
    pub fn set_source(&mut self, frame: &'a Frame, dx: i32, dy: i32) {
        self.source = Some(Source { frame, dx, dy });
    }

    /// Composite the source over the target through the clip region.
    pub fn paint(&mut self) -> GlissadeResult<()> {
        self.paint_with_alpha(1.0)
    }

    /// Composite the source over the target through the clip region, scaled
    /// by a global alpha in [0, 1].
    pub fn paint_with_alpha(&mut self, alpha: f64) -> GlissadeResult<()> {
        let src = self.require_source()?;
        let op = alpha_to_op(alpha);
        composite_paint(self.target, src, self.clip.as_deref(), op);
        Ok(())
    }

    /// Composite the source over the target restricted to the current path
    /// (and clip), without installing the path as a persistent clip. Clears
    /// the path.
    pub fn fill(&mut self, rule: FillRule) -> GlissadeResult<()> {
        let src = self.require_source()?;
        let mut cov = rasterize(&self.path, rule, self.width(), self.height());
        if let Some(clip) = self.clip.as_deref() {
            for (c, &k) in cov.iter_mut().zip(clip) {
                *c = mul_div255_u8(u16::from(*c), u16::from(k));
            }
        }
        composite_paint(self.target, src, Some(&cov), 255);
        self.path = BezPath::new();
        Ok(())
    }

    fn require_source(&self) -> GlissadeResult<Source<'a>> {
        self.source
            .ok_or_else(|| GlissadeError::render("paint without a source frame"))
    }

    fn intersect_clip(&mut self, cov: &[u8]) {
        match &mut self.clip {
            None => self.clip = Some(cov.to_vec()),
            Some(old) => {
                for (o, &n) in old.iter_mut().zip(cov) {
                    *o = mul_div255_u8(u16::from(*o), u16::from(n));
                }
            }
        }
    }
}

fn alpha_to_op(alpha: f64) -> u16 {
    ((alpha.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

fn composite_paint(target: &mut Frame, src: Source<'_>, coverage: Option<&[u8]>, op: u16) {
    if op == 0 {
        return;
    }
    let (w, h) = (target.width(), target.height());
    let (sw, sh) = (src.frame.width() as i64, src.frame.height() as i64);
    let data = target.data_mut();
    for y in 0..h {
        let sy = i64::from(y) - i64::from(src.dy);
        if sy < 0 || sy >= sh {
            continue;
        }
        for x in 0..w {
            let mut op_px = op;
            if let Some(cov) = coverage {
                let c = cov[(y as usize) * (w as usize) + (x as usize)];
                if c == 0 {
                    continue;
                }
                op_px = mul_div255_u16(op_px, u16::from(c));
            }
            if op_px == 0 {
                continue;
            }
            let sx = i64::from(x) - i64::from(src.dx);
            if sx < 0 || sx >= sw {
                continue;
            }
            let s = src.frame.pixel(sx as u32, sy as u32);
            let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
            let d = [data[i], data[i + 1], data[i + 2], data[i + 3]];
            let out = over_px(d, s, op_px);
            data[i..i + 4].copy_from_slice(&out);
        }
    }
}

/// Premultiplied "src over dst" with an extra opacity factor in [0, 255].
/// Opacity 255 with an opaque source replaces the destination exactly.
fn over_px(dst: [u8; 4], src: [u8; 4], opacity: u16) -> [u8; 4] {
    if opacity == 0 || src[3] == 0 {
        return dst;
    }
    let sa = mul_div255_u16(u16::from(src[3]), opacity);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;

    let mut out = [0u8; 4];
    out[3] = (sa as u8).saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), opacity);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}
