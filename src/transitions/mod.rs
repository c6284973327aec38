//! The transition catalog.
//!
//! Each family module exposes one `render` function with the shared shape
//! `render(cr, from, to, progress, variant)`: paint `from`, derive the reveal
//! geometry from `progress`, paint `to` through it. All renderers are
//! stateless and idempotent for a fixed progress except Dissolve
//! ([`misc_wipe::DissolveState`]), which keeps explicit per-run scratch state.
//!
//! At progress 0 the output is pixel-identical to `from`; at progress 1 it is
//! pixel-identical to `to`.

pub mod bar_wipe;
pub mod barn_door_wipe;
pub mod bow_tie_wipe;
pub mod four_box_wipe;
pub mod misc_diagonal_wipe;
pub mod misc_wipe;
pub mod push_wipe;
pub mod registry;
pub mod run;

use crate::foundation::core::Frame;
use crate::foundation::error::{GlissadeError, GlissadeResult};
use crate::render::context::PaintContext;

/// Fail fast on precondition violations: mismatched frame dimensions or a
/// progress value outside [0, 1].
pub(crate) fn check_inputs(
    cr: &PaintContext<'_>,
    from: &Frame,
    to: &Frame,
    progress: f64,
) -> GlissadeResult<()> {
    if !from.same_size(to) {
        return Err(GlissadeError::validation(format!(
            "dimension mismatch: from is {}x{}, to is {}x{}",
            from.width(),
            from.height(),
            to.width(),
            to.height()
        )));
    }
    if cr.width() != from.width() || cr.height() != from.height() {
        return Err(GlissadeError::validation(format!(
            "dimension mismatch: target is {}x{}, frames are {}x{}",
            cr.width(),
            cr.height(),
            from.width(),
            from.height()
        )));
    }
    if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
        return Err(GlissadeError::validation(format!(
            "progress must be in [0, 1], got {progress}"
        )));
    }
    Ok(())
}
