//! Glissade renders slideshow transition frames.
//!
//! Given a pair of same-sized premultiplied-RGBA8 frames and a progress value
//! in [0, 1], each renderer in the catalog composites one intermediate frame
//! of a named transition effect — bar, barn door, bow tie, four box and
//! diagonal wipes, push, cross fade, and dissolve. Progress 0 reproduces the
//! "from" frame exactly; progress 1 reproduces the "to" frame exactly.
//!
//! # Getting started
//!
//! - Enumerate the catalog with [`groups`] and pick a [`TransitionKind`]
//!   (or restore one from a saved [`VariantDescriptor::legacy_id`] with
//!   [`TransitionKind::from_legacy_id`]).
//! - Create one [`TransitionRun`] per running transition and call
//!   [`TransitionRun::render_frame`] with non-decreasing progress.
//!
//! All renderers are pure per-frame functions except Dissolve, whose per-run
//! reveal state lives inside its `TransitionRun` — concurrent transitions
//! just use separate runs.
#![forbid(unsafe_code)]

mod foundation;

/// The primitive drawing layer the renderers composite through.
pub mod render;
/// The transition catalog, registry and per-run driver.
pub mod transitions;

pub use crate::foundation::core::{Affine, BezPath, Frame, PixelMask, Point, Rect, Vec2};
pub use crate::foundation::error::{GlissadeError, GlissadeResult};

pub use crate::render::context::{FillRule, PaintContext};

pub use crate::transitions::bar_wipe::BarWipeDir;
pub use crate::transitions::barn_door_wipe::BarnDoorVariant;
pub use crate::transitions::bow_tie_wipe::BowTieOrientation;
pub use crate::transitions::four_box_wipe::FourBoxMode;
pub use crate::transitions::misc_wipe::DissolveState;
pub use crate::transitions::push_wipe::PushWipeDir;
pub use crate::transitions::registry::{
    TransitionGroup, TransitionKind, VariantDescriptor, groups,
};
pub use crate::transitions::run::{RunOpts, TransitionRun};
