//! Cross fade and dissolve.
//!
//! Cross fade is the simplest renderer in the catalog: a global alpha blend.
//! Dissolve is the one stateful renderer: it reveals destination pixels in a
//! pseudo-random order and must remember, across calls with increasing
//! progress, which pixels it has already revealed.

use crate::foundation::core::{Frame, PixelMask};
use crate::foundation::error::{GlissadeError, GlissadeResult};
use crate::foundation::math::Fnv1a64;
use crate::render::context::PaintContext;
use crate::transitions::check_inputs;

/// Progress at or below this is the start-of-run sentinel (state reset);
/// progress at or above `1 - START_EPSILON` short-circuits to the final
/// frame, guaranteeing exact convergence regardless of rounding in the
/// stochastic fill.
pub(crate) const START_EPSILON: f64 = 1e-3;

const JUMP_POOL: usize = 32;

/// Paint `from` opaque, then `to` with global alpha = progress.
pub fn render_cross_fade<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    cr.set_source(from, 0, 0);
    cr.paint()?;
    cr.set_source(to, 0, 0);
    cr.paint_with_alpha(progress)
}

/// Per-run scratch state for [`render_dissolve`].
///
/// One instance belongs to exactly one transition run; concurrent runs each
/// need their own (there are no globals). The reveal order is deterministic
/// for a given seed, but it is not a compatibility surface.
#[derive(Clone, Debug)]
pub struct DissolveState {
    seed: u64,
    mask: Option<PixelMask>,
    filled: usize,
    pool: [usize; JUMP_POOL],
    cursor: usize,
    pos: usize,
}

impl DissolveState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            mask: None,
            filled: 0,
            pool: [0; JUMP_POOL],
            cursor: 0,
            pos: 0,
        }
    }

    /// Number of destination pixels revealed so far in this run.
    pub fn revealed(&self) -> usize {
        self.filled
    }

    fn matches(&self, width: u32, height: u32) -> bool {
        self.mask
            .as_ref()
            .is_some_and(|m| m.width() == width && m.height() == height)
    }

    fn reset(&mut self, width: u32, height: u32) -> GlissadeResult<()> {
        let mask = PixelMask::try_new(width, height)?;
        let total = mask.len();
        self.mask = Some(mask);
        self.filled = 0;
        self.cursor = 0;

        // A small pool of pseudo-random jump widths, reused cyclically while
        // walking the pixel grid. Derived from the run seed so runs replay
        // deterministically.
        let span = total.saturating_sub(1).max(1) as u64;
        for (i, slot) in self.pool.iter_mut().enumerate() {
            let mut h = Fnv1a64::new(self.seed ^ Fnv1a64::OFFSET_BASIS);
            h.write_u64(i as u64);
            *slot = 1 + (h.finish() % span) as usize;
        }
        let mut h = Fnv1a64::new(self.seed ^ Fnv1a64::OFFSET_BASIS);
        h.write_u64(total as u64);
        self.pos = (h.finish() % (total as u64)) as usize;
        Ok(())
    }

    /// Mark `count` not-yet-revealed pixels. Each step jumps by a pooled
    /// offset and then linear-probes forward (wrapping rows and the buffer
    /// end) until an unset bit is found, so no pixel is revealed twice.
    fn reveal(&mut self, count: usize) -> GlissadeResult<()> {
        let Some(mask) = self.mask.as_mut() else {
            return Err(GlissadeError::render("dissolve state not initialized"));
        };
        let total = mask.len();
        let count = count.min(total - self.filled);
        for _ in 0..count {
            self.pos = (self.pos + self.pool[self.cursor]) % total;
            self.cursor = (self.cursor + 1) % JUMP_POOL;
            let mut p = self.pos;
            while mask.get(p) {
                p = (p + 1) % total;
            }
            mask.set(p);
        }
        self.filled += count;
        Ok(())
    }
}

/// Stochastic per-pixel reveal of `to`, driven by a monotonically
/// non-decreasing progress sequence over one run.
///
/// Progress below the near-zero sentinel resets `state` (and shows `from`);
/// progress above the near-one sentinel paints `to` outright. In between,
/// enough new pixels are revealed to bring the total to `round(W*H*p)`, and
/// the accumulated mask stencils `to` over `from`. A decreasing progress
/// value is undefined input and degrades to a paint-only step.
pub fn render_dissolve<'a>(
    cr: &mut PaintContext<'a>,
    from: &'a Frame,
    to: &'a Frame,
    progress: f64,
    state: &mut DissolveState,
) -> GlissadeResult<()> {
    check_inputs(cr, from, to, progress)?;
    let (w, h) = (cr.width(), cr.height());

    if progress <= START_EPSILON {
        state.reset(w, h)?;
        cr.set_source(from, 0, 0);
        return cr.paint();
    }
    if progress >= 1.0 - START_EPSILON {
        cr.set_source(to, 0, 0);
        return cr.paint();
    }

    // A run entered mid-sequence (or against new dimensions) still gets
    // fresh state.
    if !state.matches(w, h) {
        state.reset(w, h)?;
    }

    cr.set_source(from, 0, 0);
    cr.paint()?;

    let total = (w as usize) * (h as usize);
    let target_filled = ((total as f64) * progress).round() as usize;
    let to_draw = target_filled.saturating_sub(state.filled);
    state.reveal(to_draw)?;

    let Some(mask) = state.mask.as_ref() else {
        return Err(GlissadeError::render("dissolve state not initialized"));
    };
    cr.clip_mask(mask)?;
    cr.set_source(to, 0, 0);
    cr.paint()
}
