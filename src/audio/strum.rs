//! Strum synthesis — renders a time-staggered sweep across the strings into
//! one sample buffer.
//!
//! Each note is a triangle oscillator with a short linear attack and an
//! exponential decay, started `interval` seconds after the note below it.
//! Rendering is offline; the audio callback mixes the finished buffer into
//! its timeline.

use std::fmt;
use std::str::FromStr;

use crate::theory::{fret_frequency, PlayedNote};

/// Time between consecutive strings in the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrumSpeed {
    Slow,
    Fast,
}

impl StrumSpeed {
    /// Per-string stagger in seconds.
    pub fn interval(self) -> f64 {
        match self {
            StrumSpeed::Slow => 0.15,
            StrumSpeed::Fast => 0.05,
        }
    }

    pub fn toggled(self) -> StrumSpeed {
        match self {
            StrumSpeed::Slow => StrumSpeed::Fast,
            StrumSpeed::Fast => StrumSpeed::Slow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrumSpeed::Slow => "slow",
            StrumSpeed::Fast => "fast",
        }
    }
}

impl fmt::Display for StrumSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrumSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(StrumSpeed::Slow),
            "fast" => Ok(StrumSpeed::Fast),
            other => Err(format!("unknown strum speed: {other} (slow|fast)")),
        }
    }
}

/// Attack time in seconds (linear ramp 0 -> peak).
const ATTACK: f64 = 0.01;
/// Peak amplitude per note.
const PEAK: f64 = 0.3;
/// Target of the exponential decay at the end of the tone.
const DECAY_FLOOR: f64 = 0.001;
/// Tone length in seconds; the tone stops here.
pub const TONE_SECONDS: f64 = 1.5;

/// Envelope amplitude at `t` seconds after the note starts.
///
/// Linear 0 -> PEAK over ATTACK, then exponential toward DECAY_FLOOR at
/// TONE_SECONDS (constant-ratio decay, the WebAudio exponential-ramp curve).
pub fn envelope(t: f64) -> f64 {
    if t < 0.0 || t >= TONE_SECONDS {
        0.0
    } else if t < ATTACK {
        PEAK * t / ATTACK
    } else {
        let progress = (t - ATTACK) / (TONE_SECONDS - ATTACK);
        PEAK * (DECAY_FLOOR / PEAK).powf(progress)
    }
}

/// Triangle wave at `phase` in [0, 1). Returns a value in [-1, 1].
fn triangle(phase: f64) -> f64 {
    if phase < 0.25 {
        4.0 * phase
    } else if phase < 0.75 {
        2.0 - 4.0 * phase
    } else {
        4.0 * phase - 4.0
    }
}

/// Notes in strum order: descending string number, string 6 (low E) first,
/// regardless of input order.
pub fn strum_order(notes: &[PlayedNote]) -> Vec<PlayedNote> {
    let mut ordered = notes.to_vec();
    ordered.sort_by(|a, b| b.string.number().cmp(&a.string.number()));
    ordered
}

/// Start offset in seconds for the `i`-th note of the sweep.
pub fn start_offset(i: usize, speed: StrumSpeed) -> f64 {
    i as f64 * speed.interval()
}

/// Render a strummed chord into an interleaved sample buffer.
///
/// The buffer covers the last note's start plus the full tone length:
/// `(n-1) * interval + 1.5 s`. Tones are summed; the caller's limiter
/// handles the sum of six attacks.
pub fn render_strum(
    notes: &[PlayedNote],
    speed: StrumSpeed,
    sample_rate: u32,
    channels: u16,
) -> Vec<f32> {
    if notes.is_empty() {
        return Vec::new();
    }

    let ordered = strum_order(notes);
    let sr = sample_rate as f64;
    let total_seconds = start_offset(ordered.len() - 1, speed) + TONE_SECONDS;
    let total_frames = (total_seconds * sr).ceil() as usize;

    let mut mono = vec![0.0f32; total_frames];
    for (i, note) in ordered.iter().enumerate() {
        let freq = fret_frequency(note.string, note.fret);
        let start_frame = (start_offset(i, speed) * sr).round() as usize;
        let tone_frames = (TONE_SECONDS * sr) as usize;

        let mut phase = 0.0f64;
        for j in 0..tone_frames {
            let frame = start_frame + j;
            if frame >= total_frames {
                break;
            }
            let t = j as f64 / sr;
            mono[frame] += (envelope(t) * triangle(phase)) as f32;
            phase += freq / sr;
            phase -= phase.floor();
        }
    }

    if channels == 1 {
        return mono;
    }

    let mut interleaved = Vec::with_capacity(mono.len() * channels as usize);
    for sample in mono {
        for _ in 0..channels {
            interleaved.push(sample);
        }
    }
    interleaved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::GuitarString;
    use assert_approx_eq::assert_approx_eq;

    fn note(string: GuitarString, fret: u8) -> PlayedNote {
        PlayedNote {
            string,
            fret,
            finger: 0,
            is_root: false,
        }
    }

    #[test]
    fn parse_speed() {
        assert_eq!("slow".parse::<StrumSpeed>(), Ok(StrumSpeed::Slow));
        assert_eq!("FAST".parse::<StrumSpeed>(), Ok(StrumSpeed::Fast));
        assert!("medium".parse::<StrumSpeed>().is_err());
    }

    #[test]
    fn intervals() {
        assert_approx_eq!(StrumSpeed::Slow.interval(), 0.15);
        assert_approx_eq!(StrumSpeed::Fast.interval(), 0.05);
    }

    #[test]
    fn low_strings_strum_first() {
        let notes = [
            note(GuitarString::HighE, 0),
            note(GuitarString::LowE, 0),
            note(GuitarString::G, 2),
        ];
        let ordered = strum_order(&notes);
        let numbers: Vec<u8> = ordered.iter().map(|n| n.string.number()).collect();
        assert_eq!(numbers, [6, 3, 1]);
    }

    #[test]
    fn slow_offsets_step_by_150ms() {
        assert_approx_eq!(start_offset(0, StrumSpeed::Slow), 0.0);
        assert_approx_eq!(start_offset(1, StrumSpeed::Slow), 0.15);
        assert_approx_eq!(start_offset(2, StrumSpeed::Slow), 0.30);
    }

    #[test]
    fn envelope_shape() {
        assert_approx_eq!(envelope(0.0), 0.0);
        assert_approx_eq!(envelope(ATTACK / 2.0), PEAK / 2.0);
        assert_approx_eq!(envelope(ATTACK), PEAK, 1e-9);
        // Just before the tone ends the decay has reached its floor.
        assert_approx_eq!(envelope(TONE_SECONDS - 1e-9), DECAY_FLOOR, 1e-5);
        assert_approx_eq!(envelope(TONE_SECONDS), 0.0);
        assert_approx_eq!(envelope(-0.1), 0.0);
    }

    #[test]
    fn envelope_is_monotonic_decay() {
        let mut last = envelope(ATTACK);
        let mut t = ATTACK;
        while t < TONE_SECONDS {
            let amp = envelope(t);
            assert!(amp <= last + 1e-12, "decay not monotonic at t={t}");
            last = amp;
            t += 0.01;
        }
    }

    #[test]
    fn empty_chord_renders_nothing() {
        assert!(render_strum(&[], StrumSpeed::Slow, 44100, 2).is_empty());
    }

    #[test]
    fn buffer_covers_last_note_tail() {
        let notes = [
            note(GuitarString::LowE, 0),
            note(GuitarString::G, 0),
            note(GuitarString::HighE, 0),
        ];
        let samples = render_strum(&notes, StrumSpeed::Slow, 44100, 1);
        let expected = ((2.0 * 0.15 + TONE_SECONDS) * 44100.0).ceil() as usize;
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn first_sample_is_silent_attack_start() {
        let notes = [note(GuitarString::LowE, 0)];
        let samples = render_strum(&notes, StrumSpeed::Fast, 44100, 1);
        assert_approx_eq!(samples[0] as f64, 0.0, 1e-6);
    }

    #[test]
    fn staggered_notes_start_on_schedule() {
        // Single high-E note strummed second: everything before 0.05 s is
        // only the first note; the second note's region must be non-silent
        // shortly after its start.
        let notes = [note(GuitarString::LowE, 0), note(GuitarString::HighE, 0)];
        let sr = 44100u32;
        let samples = render_strum(&notes, StrumSpeed::Fast, sr, 1);

        let second_start = (0.05 * sr as f64).round() as usize;
        let window = &samples[second_start..second_start + 2000];
        assert!(window.iter().any(|s| s.abs() > 0.01));
    }

    #[test]
    fn output_stays_within_sane_bounds() {
        let notes: Vec<PlayedNote> = [
            (GuitarString::LowE, 0),
            (GuitarString::A, 2),
            (GuitarString::D, 2),
            (GuitarString::G, 1),
            (GuitarString::B, 0),
            (GuitarString::HighE, 0),
        ]
        .iter()
        .map(|&(s, f)| note(s, f))
        .collect();

        let samples = render_strum(&notes, StrumSpeed::Fast, 44100, 1);
        // Six notes at peak 0.3 can sum to at most 1.8 in theory; staggered
        // attacks keep it well below that, but never past the hard bound.
        for &s in &samples {
            assert!(s.abs() <= 1.8);
        }
        assert!(samples.iter().any(|s| s.abs() > 0.05), "strum is silent");
    }

    #[test]
    fn stereo_interleaving_duplicates_mono() {
        let notes = [note(GuitarString::D, 0)];
        let mono = render_strum(&notes, StrumSpeed::Slow, 8000, 1);
        let stereo = render_strum(&notes, StrumSpeed::Slow, 8000, 2);
        assert_eq!(stereo.len(), mono.len() * 2);
        for (i, &m) in mono.iter().enumerate() {
            assert_eq!(stereo[2 * i], m);
            assert_eq!(stereo[2 * i + 1], m);
        }
    }
}
