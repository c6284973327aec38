//! Per-run transition driver.
//!
//! A [`TransitionRun`] owns everything one transition needs across its frame
//! sequence: the selected variant and, for Dissolve, the per-run reveal
//! state. Hosts create one per running transition and call
//! [`TransitionRun::render_frame`] with non-decreasing progress.

use crate::foundation::core::Frame;
use crate::foundation::error::GlissadeResult;
use crate::render::context::PaintContext;
use crate::transitions::misc_wipe::DissolveState;
use crate::transitions::registry::TransitionKind;
use crate::transitions::{
    bar_wipe, barn_door_wipe, bow_tie_wipe, four_box_wipe, misc_diagonal_wipe, misc_wipe,
    push_wipe,
};

/// Options for a transition run.
#[derive(Clone, Copy, Debug)]
pub struct RunOpts {
    pub(crate) dissolve_seed: u64,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            dissolve_seed: crate::foundation::math::Fnv1a64::OFFSET_BASIS,
        }
    }
}

impl RunOpts {
    /// Seed for Dissolve's pseudo-random reveal order. Runs with the same
    /// seed replay identically.
    pub fn with_dissolve_seed(mut self, seed: u64) -> Self {
        self.dissolve_seed = seed;
        self
    }
}

/// One running transition: a variant plus its per-run scratch state.
#[derive(Clone, Debug)]
pub struct TransitionRun {
    kind: TransitionKind,
    opts: RunOpts,
    dissolve: Option<DissolveState>,
}

impl TransitionRun {
    pub fn new(kind: TransitionKind) -> Self {
        Self::with_opts(kind, RunOpts::default())
    }

    pub fn with_opts(kind: TransitionKind, opts: RunOpts) -> Self {
        Self {
            kind,
            opts,
            dissolve: None,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Composite one frame of the transition onto `target`.
    ///
    /// `from` and `to` must have equal dimensions matching `target`, and
    /// `progress` must lie in [0, 1]; violations fail with
    /// [`GlissadeError::Validation`](crate::GlissadeError::Validation).
    /// `target` is borrowed only for the duration of the call.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = ?self.kind, progress))]
    pub fn render_frame(
        &mut self,
        target: &mut Frame,
        from: &Frame,
        to: &Frame,
        progress: f64,
    ) -> GlissadeResult<()> {
        let mut cr = PaintContext::new(target);
        match self.kind {
            TransitionKind::BarWipe(dir) => bar_wipe::render(&mut cr, from, to, progress, dir),
            TransitionKind::BarnDoorWipe(variant) => {
                barn_door_wipe::render(&mut cr, from, to, progress, variant)
            }
            TransitionKind::BowTieWipe(orientation) => {
                bow_tie_wipe::render(&mut cr, from, to, progress, orientation)
            }
            TransitionKind::FourBoxWipe(mode) => {
                four_box_wipe::render(&mut cr, from, to, progress, mode)
            }
            TransitionKind::CrossFade => misc_wipe::render_cross_fade(&mut cr, from, to, progress),
            TransitionKind::Dissolve => {
                let state = self
                    .dissolve
                    .get_or_insert_with(|| DissolveState::new(self.opts.dissolve_seed));
                misc_wipe::render_dissolve(&mut cr, from, to, progress, state)
            }
            TransitionKind::DoubleBarnDoor => {
                misc_diagonal_wipe::render_double_barn_door(&mut cr, from, to, progress)
            }
            TransitionKind::DoubleDiamond => {
                misc_diagonal_wipe::render_double_diamond(&mut cr, from, to, progress)
            }
            TransitionKind::PushWipe(dir) => push_wipe::render(&mut cr, from, to, progress, dir),
        }
    }
}
