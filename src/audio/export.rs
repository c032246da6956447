//! WAV export — renders one full chord cycle for a key to disk, no audio
//! device required.

use std::path::Path;

use crate::theory::{ChordSequence, Note};

use super::strum::{render_strum, StrumSpeed};

/// Sample rate for exported files.
const EXPORT_SAMPLE_RATE: u32 = 44100;

/// Errors from WAV export.
#[derive(Debug)]
pub enum ExportError {
    Wav(hound::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Wav(e) => write!(f, "WAV error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<hound::Error> for ExportError {
    fn from(e: hound::Error) -> Self {
        ExportError::Wav(e)
    }
}

/// Render the five chords of `key` in sequence order to a 16-bit mono WAV.
///
/// Each chord gets `tempo_ms` of timeline before the next strum starts, the
/// same pacing as auto-play; a strum longer than the interval simply runs
/// into the next one, tail truncated at the chord boundary. The final chord
/// rings out in full.
pub fn export_cycle(
    path: &Path,
    key: Note,
    speed: StrumSpeed,
    tempo_ms: u64,
) -> Result<(), ExportError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: EXPORT_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;

    let interval_frames = (tempo_ms as f64 / 1000.0 * EXPORT_SAMPLE_RATE as f64) as usize;
    let sequence = ChordSequence::for_key(key);
    let last = sequence.len() - 1;

    for (i, chord) in sequence.chords().iter().enumerate() {
        let samples = render_strum(&chord.notes, speed, EXPORT_SAMPLE_RATE, 1);
        let frames = if i == last {
            samples.len()
        } else {
            interval_frames
        };

        for frame in 0..frames {
            let s = samples.get(frame).copied().unwrap_or(0.0);
            let clamped = s.clamp(-1.0, 1.0);
            writer.write_sample((clamped * i16::MAX as f32) as i16)?;
        }
    }

    writer.finalize()?;
    Ok(())
}
