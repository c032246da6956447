//! Music theory core — pitch classes, CAGED shape templates, transposition,
//! and the sorted chord sequence for a key.

pub mod note;
pub mod sequence;
pub mod shape;
pub mod transpose;

pub use note::{fret_frequency, GuitarString, Note};
pub use sequence::ChordSequence;
pub use shape::{template, FingerPosition, ShapeName, ShapeTemplate, OPEN_C_FINGERING, SHAPES};
pub use transpose::{transpose, ChordInstance, PlayedNote};
