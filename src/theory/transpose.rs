//! Transposition — shifts a shape template to a target key and renumbers
//! fingers for barre positions.

use super::note::{GuitarString, Note};
use super::shape::{ShapeName, ShapeTemplate, OPEN_C_FINGERING};

/// One sounded string of a transposed chord. `fret` is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedNote {
    pub string: GuitarString,
    pub fret: u8,
    pub finger: u8,
    pub is_root: bool,
}

/// A shape template moved to a concrete key.
///
/// `fret_position` is the shift amount: 0 means the open (unmovable) chord,
/// anything positive means a barre at that fret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordInstance {
    pub shape: ShapeName,
    pub fret_position: u8,
    pub root: Note,
    pub notes: Vec<PlayedNote>,
}

impl ChordInstance {
    /// True when the shape is shifted and needs a barre.
    pub fn is_movable(&self) -> bool {
        self.fret_position > 0
    }
}

/// Move `template` so its root sounds the target key.
///
/// Shift is `(key - base_root) mod 12`, always in 0..=11 — one canonical
/// position per key per shape, no alternate octaves. Frets accumulate past
/// 12 for high shifts; the display window handles range limiting.
///
/// Finger renumbering for movable shapes: the index finger takes the barre,
/// so open strings become finger 1 and every fretted finger moves up one,
/// capped at 4 (the cap is policy for stretched shapes, not derived).
/// Unmovable shapes keep template fingers verbatim, except open C which
/// takes the canonical fingering table wholesale.
pub fn transpose(template: &ShapeTemplate, key: Note) -> ChordInstance {
    let shift = (key.index() + 12 - template.base_root.index()) % 12;
    let movable = shift > 0;

    let notes: Vec<PlayedNote> = if !movable && template.name == ShapeName::C {
        // Known sharp edge: force the canonical 3-2-0-1-0 open-C fingering
        // rather than trusting the generic template.
        OPEN_C_FINGERING
            .iter()
            .map(|p| PlayedNote {
                string: p.string,
                fret: p.fret_offset,
                finger: p.finger,
                is_root: p.is_root,
            })
            .collect()
    } else {
        template
            .positions
            .iter()
            .map(|p| {
                let finger = if movable {
                    if p.finger == 0 {
                        1
                    } else {
                        (p.finger + 1).min(4)
                    }
                } else {
                    p.finger
                };
                PlayedNote {
                    string: p.string,
                    fret: p.fret_offset + shift,
                    finger,
                    is_root: p.is_root,
                }
            })
            .collect()
    };

    ChordInstance {
        shape: template.name,
        fret_position: shift,
        root: key,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::shape::{template, SHAPES};

    #[test]
    fn shift_is_always_in_range() {
        for key in Note::ALL {
            for shape in &SHAPES {
                let chord = transpose(shape, key);
                assert!(chord.fret_position <= 11);
            }
        }
    }

    #[test]
    fn zero_shift_only_for_matching_root() {
        for key in Note::ALL {
            for shape in &SHAPES {
                let chord = transpose(shape, key);
                assert_eq!(chord.fret_position == 0, shape.base_root == key);
            }
        }
    }

    #[test]
    fn open_c_uses_canonical_fingering() {
        let chord = transpose(template(ShapeName::C), Note::C);
        assert!(!chord.is_movable());
        let fingers: Vec<u8> = chord.notes.iter().map(|n| n.finger).collect();
        assert_eq!(fingers, [3, 2, 0, 1, 0]);
    }

    #[test]
    fn unmovable_fingers_pass_through() {
        let chord = transpose(template(ShapeName::E), Note::E);
        let expected: Vec<u8> = template(ShapeName::E)
            .positions
            .iter()
            .map(|p| p.finger)
            .collect();
        let actual: Vec<u8> = chord.notes.iter().map(|n| n.finger).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn movable_fingers_never_open() {
        for key in Note::ALL {
            for shape in &SHAPES {
                let chord = transpose(shape, key);
                if chord.is_movable() {
                    for n in &chord.notes {
                        assert!(
                            (1..=4).contains(&n.finger),
                            "{:?} in {key}: finger {}",
                            shape.name,
                            n.finger
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn movable_open_strings_get_barred() {
        // E shape shifted to G: a barre at fret 3; every template open
        // string lands on the barre finger.
        let chord = transpose(template(ShapeName::E), Note::G);
        assert_eq!(chord.fret_position, 3);
        for (n, p) in chord.notes.iter().zip(template(ShapeName::E).positions) {
            if p.finger == 0 {
                assert_eq!(n.finger, 1);
                assert_eq!(n.fret, 3);
            } else {
                assert_eq!(n.finger, p.finger + 1);
            }
        }
    }

    #[test]
    fn finger_four_stays_at_ceiling() {
        // G shape has a pinky (4) on the high E string; shifted it stays 4.
        let chord = transpose(template(ShapeName::G), Note::A);
        assert!(chord.is_movable());
        let high_e = chord
            .notes
            .iter()
            .find(|n| n.string == GuitarString::HighE)
            .unwrap();
        assert_eq!(high_e.finger, 4);
    }

    #[test]
    fn frets_are_offset_plus_shift() {
        let chord = transpose(template(ShapeName::D), Note::C);
        // D -> C is a shift of 10; no modulo, frets pass 12.
        assert_eq!(chord.fret_position, 10);
        for (n, p) in chord.notes.iter().zip(template(ShapeName::D).positions) {
            assert_eq!(n.fret, p.fret_offset + 10);
        }
    }

    #[test]
    fn root_flags_and_order_preserved() {
        for key in Note::ALL {
            for shape in &SHAPES {
                let chord = transpose(shape, key);
                assert_eq!(chord.notes.len(), shape.positions.len());
                for (n, p) in chord.notes.iter().zip(shape.positions) {
                    assert_eq!(n.string, p.string);
                    assert_eq!(n.is_root, p.is_root);
                }
            }
        }
    }
}
