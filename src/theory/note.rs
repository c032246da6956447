//! Pitch classes and guitar strings — the fixed tables everything else
//! derives from.

use std::fmt;
use std::str::FromStr;

/// One of the 12 chromatic pitch classes. Sharp spellings only; flats are
/// normalized on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C = 0,
    CSharp = 1,
    D = 2,
    DSharp = 3,
    E = 4,
    F = 5,
    FSharp = 6,
    G = 7,
    GSharp = 8,
    A = 9,
    ASharp = 10,
    B = 11,
}

impl Note {
    /// All 12 pitch classes in chromatic order, C first.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Chromatic index, C = 0 .. B = 11.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for an index, taken mod 12.
    pub fn from_index(index: u8) -> Note {
        Note::ALL[(index % 12) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Next pitch class chromatically, wrapping B -> C.
    pub fn next(self) -> Note {
        Note::from_index(self.index() + 1)
    }

    /// Previous pitch class chromatically, wrapping C -> B.
    pub fn prev(self) -> Note {
        Note::from_index(self.index() + 11)
    }

    /// True if this natural has a sharp a semitone up (all except E and B).
    pub fn has_sharp(self) -> bool {
        matches!(self, Note::C | Note::D | Note::F | Note::G | Note::A)
    }

    /// True for the five sharp pitch classes.
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            Note::CSharp | Note::DSharp | Note::FSharp | Note::GSharp | Note::ASharp
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = String;

    /// Parse a pitch-class name: "C", "C#", "Db", case-insensitive letter.
    /// Flats normalize to the equivalent sharp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| "empty note name".to_string())?;

        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(format!("unknown note letter: {letter}")),
        };

        let accidental: i32 = match chars.next() {
            None => 0,
            Some('#') => 1,
            Some('b') => -1,
            Some(c) => return Err(format!("unknown accidental: {c}")),
        };

        if chars.next().is_some() {
            return Err(format!("trailing characters in note name: {s}"));
        }

        Ok(Note::from_index(((base + accidental + 12) % 12) as u8))
    }
}

/// One of the 6 strings in standard tuning. String 1 is high E, string 6
/// low E — conventional tab numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuitarString {
    HighE = 1,
    B = 2,
    G = 3,
    D = 4,
    A = 5,
    LowE = 6,
}

impl GuitarString {
    /// High to low: 1, 2, 3, 4, 5, 6.
    pub const ALL: [GuitarString; 6] = [
        GuitarString::HighE,
        GuitarString::B,
        GuitarString::G,
        GuitarString::D,
        GuitarString::A,
        GuitarString::LowE,
    ];

    /// Tab number, 1 (high E) through 6 (low E).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Open-string frequency in Hz, standard tuning (E4 down to E2).
    pub fn open_frequency(self) -> f64 {
        match self {
            GuitarString::HighE => 329.63,
            GuitarString::B => 246.94,
            GuitarString::G => 196.00,
            GuitarString::D => 146.83,
            GuitarString::A => 110.00,
            GuitarString::LowE => 82.41,
        }
    }
}

/// Frequency of a string fretted at `fret`, equal temperament:
/// `open * 2^(fret/12)`.
pub fn fret_frequency(string: GuitarString, fret: u8) -> f64 {
    string.open_frequency() * 2.0f64.powf(fret as f64 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn indices_are_chromatic() {
        for (i, note) in Note::ALL.iter().enumerate() {
            assert_eq!(note.index() as usize, i);
            assert_eq!(Note::from_index(i as u8), *note);
        }
    }

    #[test]
    fn from_index_wraps_mod_12() {
        assert_eq!(Note::from_index(12), Note::C);
        assert_eq!(Note::from_index(19), Note::G);
    }

    #[test]
    fn next_prev_are_inverse() {
        for note in Note::ALL {
            assert_eq!(note.next().prev(), note);
            assert_eq!(note.prev().next(), note);
        }
    }

    #[test]
    fn next_wraps_b_to_c() {
        assert_eq!(Note::B.next(), Note::C);
        assert_eq!(Note::C.prev(), Note::B);
    }

    #[test]
    fn parse_naturals() {
        assert_eq!("C".parse::<Note>(), Ok(Note::C));
        assert_eq!("g".parse::<Note>(), Ok(Note::G));
        assert_eq!("B".parse::<Note>(), Ok(Note::B));
    }

    #[test]
    fn parse_sharps_and_flats() {
        assert_eq!("F#".parse::<Note>(), Ok(Note::FSharp));
        assert_eq!("Bb".parse::<Note>(), Ok(Note::ASharp));
        assert_eq!("Cb".parse::<Note>(), Ok(Note::B));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Note>().is_err());
        assert!("H".parse::<Note>().is_err());
        assert!("C#x".parse::<Note>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Note::CSharp.to_string(), "C#");
        assert_eq!(Note::A.to_string(), "A");
    }

    #[test]
    fn string_numbers() {
        assert_eq!(GuitarString::HighE.number(), 1);
        assert_eq!(GuitarString::LowE.number(), 6);
    }

    #[test]
    fn open_frequencies_match_table() {
        assert_approx_eq!(GuitarString::HighE.open_frequency(), 329.63);
        assert_approx_eq!(GuitarString::B.open_frequency(), 246.94);
        assert_approx_eq!(GuitarString::G.open_frequency(), 196.00);
        assert_approx_eq!(GuitarString::D.open_frequency(), 146.83);
        assert_approx_eq!(GuitarString::A.open_frequency(), 110.00);
        assert_approx_eq!(GuitarString::LowE.open_frequency(), 82.41);
    }

    #[test]
    fn fret_zero_is_open_frequency() {
        for s in GuitarString::ALL {
            assert_approx_eq!(fret_frequency(s, 0), s.open_frequency(), 1e-9);
        }
    }

    #[test]
    fn fret_12_doubles_open_frequency() {
        for s in GuitarString::ALL {
            assert_approx_eq!(fret_frequency(s, 12), 2.0 * s.open_frequency(), 1e-6);
        }
    }

    #[test]
    fn has_sharp_excludes_e_and_b() {
        assert!(Note::C.has_sharp());
        assert!(Note::A.has_sharp());
        assert!(!Note::E.has_sharp());
        assert!(!Note::B.has_sharp());
    }
}
