//! Chord sequence — the five transposed shapes for a key, ordered low on
//! the neck to high, with wraparound navigation.

use super::note::Note;
use super::shape::SHAPES;
use super::transpose::{transpose, ChordInstance};

/// The practice cycle for one key. Rebuilt whenever the key changes, which
/// resets the position to the first chord.
#[derive(Debug, Clone)]
pub struct ChordSequence {
    key: Note,
    chords: Vec<ChordInstance>,
    index: usize,
}

impl ChordSequence {
    /// Transpose all five shapes to `key` and sort ascending by fret
    /// position. The sort is stable; distinct base roots mean at most one
    /// chord sits at fret 0, so true ties do not occur in practice.
    pub fn for_key(key: Note) -> Self {
        let mut chords: Vec<ChordInstance> =
            SHAPES.iter().map(|shape| transpose(shape, key)).collect();
        chords.sort_by_key(|c| c.fret_position);
        Self {
            key,
            chords,
            index: 0,
        }
    }

    pub fn key(&self) -> Note {
        self.key
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &ChordInstance {
        &self.chords[self.index]
    }

    pub fn chords(&self) -> &[ChordInstance] {
        &self.chords
    }

    /// Advance one chord, wrapping after the last.
    pub fn next(&mut self) -> &ChordInstance {
        self.index = (self.index + 1) % self.chords.len();
        self.current()
    }

    /// Step back one chord, wrapping before the first.
    pub fn prev(&mut self) -> &ChordInstance {
        self.index = (self.index + self.chords.len() - 1) % self.chords.len();
        self.current()
    }
}
