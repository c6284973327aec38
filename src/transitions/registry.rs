//! Static transition catalog for host enumeration.
//!
//! Each group advertises its variants as (display name, typed kind, legacy
//! numeric id). The ids are opaque compatibility constants used by hosts to
//! persist a selected transition across sessions; they follow the published
//! SMPTE/SMIL wipe codes where those exist and must never be re-derived or
//! renumbered.

use crate::transitions::bar_wipe::BarWipeDir;
use crate::transitions::barn_door_wipe::BarnDoorVariant;
use crate::transitions::bow_tie_wipe::BowTieOrientation;
use crate::transitions::four_box_wipe::FourBoxMode;
use crate::transitions::push_wipe::PushWipeDir;

/// A renderable transition variant, with direction/orientation baked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransitionKind {
    BarWipe(BarWipeDir),
    BarnDoorWipe(BarnDoorVariant),
    BowTieWipe(BowTieOrientation),
    FourBoxWipe(FourBoxMode),
    CrossFade,
    Dissolve,
    DoubleBarnDoor,
    DoubleDiamond,
    PushWipe(PushWipeDir),
}

/// One selectable entry in a transition group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VariantDescriptor {
    /// Human-readable variant name.
    pub name: &'static str,
    /// The render dispatch target.
    pub kind: TransitionKind,
    /// Stable numeric identifier for host-side persistence.
    pub legacy_id: u16,
}

/// A named family of transition variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TransitionGroup {
    pub name: &'static str,
    pub variants: &'static [VariantDescriptor],
}

const fn variant(name: &'static str, kind: TransitionKind, legacy_id: u16) -> VariantDescriptor {
    VariantDescriptor {
        name,
        kind,
        legacy_id,
    }
}

static GROUPS: &[TransitionGroup] = &[
    TransitionGroup {
        name: "Bar Wipe",
        variants: &[
            variant("From Left", TransitionKind::BarWipe(BarWipeDir::Left), 1),
            variant("From Top", TransitionKind::BarWipe(BarWipeDir::Top), 2),
            variant("From Right", TransitionKind::BarWipe(BarWipeDir::Right), 3),
            variant("From Bottom", TransitionKind::BarWipe(BarWipeDir::Bottom), 4),
        ],
    },
    TransitionGroup {
        name: "Barn Door Wipe",
        variants: &[
            variant(
                "Vertical",
                TransitionKind::BarnDoorWipe(BarnDoorVariant::Vertical),
                21,
            ),
            variant(
                "Horizontal",
                TransitionKind::BarnDoorWipe(BarnDoorVariant::Horizontal),
                22,
            ),
            variant(
                "Diagonal Bottom Left",
                TransitionKind::BarnDoorWipe(BarnDoorVariant::DiagonalBottomLeft),
                45,
            ),
            variant(
                "Diagonal Top Left",
                TransitionKind::BarnDoorWipe(BarnDoorVariant::DiagonalTopLeft),
                46,
            ),
        ],
    },
    TransitionGroup {
        name: "Bow Tie Wipe",
        variants: &[
            variant(
                "Vertical",
                TransitionKind::BowTieWipe(BowTieOrientation::Vertical),
                23,
            ),
            variant(
                "Horizontal",
                TransitionKind::BowTieWipe(BowTieOrientation::Horizontal),
                24,
            ),
        ],
    },
    TransitionGroup {
        name: "Four Box Wipe",
        variants: &[
            variant(
                "Corners In",
                TransitionKind::FourBoxWipe(FourBoxMode::CornersIn),
                7,
            ),
            variant(
                "Corners Out",
                TransitionKind::FourBoxWipe(FourBoxMode::CornersOut),
                8,
            ),
        ],
    },
    TransitionGroup {
        name: "Misc",
        variants: &[
            variant("Cross Fade", TransitionKind::CrossFade, 101),
            variant("Dissolve", TransitionKind::Dissolve, 102),
        ],
    },
    TransitionGroup {
        name: "Misc Diagonal Wipe",
        variants: &[
            variant("Double Barn Door", TransitionKind::DoubleBarnDoor, 47),
            variant("Double Diamond", TransitionKind::DoubleDiamond, 48),
        ],
    },
    TransitionGroup {
        name: "Push Wipe",
        variants: &[
            variant(
                "From Left",
                TransitionKind::PushWipe(PushWipeDir::FromLeft),
                61,
            ),
            variant("From Top", TransitionKind::PushWipe(PushWipeDir::FromTop), 62),
            variant(
                "From Right",
                TransitionKind::PushWipe(PushWipeDir::FromRight),
                63,
            ),
            variant(
                "From Bottom",
                TransitionKind::PushWipe(PushWipeDir::FromBottom),
                64,
            ),
        ],
    },
];

/// The full transition catalog, in display order.
pub fn groups() -> &'static [TransitionGroup] {
    GROUPS
}

impl TransitionKind {
    /// The variant's stable numeric identifier.
    pub fn legacy_id(self) -> u16 {
        for g in GROUPS {
            for v in g.variants {
                if v.kind == self {
                    return v.legacy_id;
                }
            }
        }
        unreachable!("every TransitionKind is registered")
    }

    /// Look a variant up by its stable numeric identifier.
    pub fn from_legacy_id(id: u16) -> Option<TransitionKind> {
        for g in GROUPS {
            for v in g.variants {
                if v.legacy_id == id {
                    return Some(v.kind);
                }
            }
        }
        None
    }

    /// The variant's display name.
    pub fn display_name(self) -> &'static str {
        for g in GROUPS {
            for v in g.variants {
                if v.kind == self {
                    return v.name;
                }
            }
        }
        unreachable!("every TransitionKind is registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_groups_and_twenty_variants() {
        assert_eq!(groups().len(), 7);
        let n: usize = groups().iter().map(|g| g.variants.len()).sum();
        assert_eq!(n, 20);
    }

    #[test]
    fn legacy_ids_are_unique_and_roundtrip() {
        let mut seen = HashSet::new();
        for g in groups() {
            for v in g.variants {
                assert!(seen.insert(v.legacy_id), "duplicate id {}", v.legacy_id);
                assert_eq!(TransitionKind::from_legacy_id(v.legacy_id), Some(v.kind));
                assert_eq!(v.kind.legacy_id(), v.legacy_id);
                assert_eq!(v.kind.display_name(), v.name);
            }
        }
    }

    #[test]
    fn legacy_ids_are_pinned() {
        // Compatibility constants; renumbering breaks saved host
        // configuration.
        let expect: &[(u16, TransitionKind)] = &[
            (1, TransitionKind::BarWipe(BarWipeDir::Left)),
            (2, TransitionKind::BarWipe(BarWipeDir::Top)),
            (3, TransitionKind::BarWipe(BarWipeDir::Right)),
            (4, TransitionKind::BarWipe(BarWipeDir::Bottom)),
            (7, TransitionKind::FourBoxWipe(FourBoxMode::CornersIn)),
            (8, TransitionKind::FourBoxWipe(FourBoxMode::CornersOut)),
            (21, TransitionKind::BarnDoorWipe(BarnDoorVariant::Vertical)),
            (22, TransitionKind::BarnDoorWipe(BarnDoorVariant::Horizontal)),
            (23, TransitionKind::BowTieWipe(BowTieOrientation::Vertical)),
            (24, TransitionKind::BowTieWipe(BowTieOrientation::Horizontal)),
            (
                45,
                TransitionKind::BarnDoorWipe(BarnDoorVariant::DiagonalBottomLeft),
            ),
            (
                46,
                TransitionKind::BarnDoorWipe(BarnDoorVariant::DiagonalTopLeft),
            ),
            (47, TransitionKind::DoubleBarnDoor),
            (48, TransitionKind::DoubleDiamond),
            (61, TransitionKind::PushWipe(PushWipeDir::FromLeft)),
            (62, TransitionKind::PushWipe(PushWipeDir::FromTop)),
            (63, TransitionKind::PushWipe(PushWipeDir::FromRight)),
            (64, TransitionKind::PushWipe(PushWipeDir::FromBottom)),
            (101, TransitionKind::CrossFade),
            (102, TransitionKind::Dissolve),
        ];
        for &(id, kind) in expect {
            assert_eq!(TransitionKind::from_legacy_id(id), Some(kind));
        }
        assert_eq!(TransitionKind::from_legacy_id(99), None);
    }

    #[test]
    fn descriptors_serialize_for_host_enumeration() {
        let json = serde_json::to_value(groups()).unwrap();
        let first = &json[0];
        assert_eq!(first["name"], "Bar Wipe");
        assert_eq!(first["variants"][0]["name"], "From Left");
        assert_eq!(first["variants"][0]["legacy_id"], 1);
    }
}
