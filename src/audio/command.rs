//! Commands sent from the UI thread to the audio thread via ring buffer.

/// Commands sent from the UI thread to the audio thread via ring buffer.
#[derive(Debug)]
pub enum AudioCommand {
    /// Mix a rendered strum into the playback timeline at the current
    /// cursor. Contains interleaved samples for the stream's channel count.
    Strum(Vec<f32>),

    /// Set master volume (0.0 to 1.0).
    SetVolume(f32),

    /// Silence playback and clear the timeline.
    Stop,
}
