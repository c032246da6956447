//! Audio callback — runs on the cpal audio thread.
//!
//! Drains commands from the ring buffer and mixes strum buffers into a
//! playback timeline at the current cursor. Because each strum is summed
//! rather than queued, a chord change layers over the previous chord's
//! decay tail, matching absolute-time tone scheduling.

use ringbuf::traits::Consumer;
use ringbuf::HeapCons;

use super::command::AudioCommand;
use super::limiter::Limiter;

/// Threshold (in samples) at which consumed samples are compacted.
/// When `cursor` exceeds this, remaining data shifts to the front.
const COMPACT_THRESHOLD: usize = 8192;

/// State that lives on the audio thread. Accessed only from the cpal callback.
pub struct AudioCallback {
    consumer: HeapCons<AudioCommand>,
    timeline: Vec<f32>,
    cursor: usize,
    volume: f32,
    limiter: Limiter,
}

impl AudioCallback {
    /// Create a new audio callback with the given ring buffer consumer.
    pub fn new(consumer: HeapCons<AudioCommand>) -> Self {
        Self {
            consumer,
            timeline: Vec::new(),
            cursor: 0,
            volume: 1.0,
            limiter: Limiter::default(),
        }
    }

    /// Called by cpal for each audio buffer. Fills `output` with samples.
    pub fn process(&mut self, output: &mut [f32]) {
        // 1. Drain all pending commands from the ring buffer.
        while let Some(cmd) = self.consumer.try_pop() {
            match cmd {
                AudioCommand::Strum(data) => self.mix_at_cursor(&data),
                AudioCommand::SetVolume(v) => {
                    self.volume = v.clamp(0.0, 1.0);
                }
                AudioCommand::Stop => {
                    self.timeline.clear();
                    self.cursor = 0;
                }
            }
        }

        // 2. Fill output from the timeline, applying volume.
        let available = self.timeline.len() - self.cursor;
        let copy_len = output.len().min(available);

        for (out, &src) in output[..copy_len]
            .iter_mut()
            .zip(&self.timeline[self.cursor..self.cursor + copy_len])
        {
            *out = src * self.volume;
        }
        self.cursor += copy_len;

        // Silence past the end of the timeline.
        for sample in output[copy_len..].iter_mut() {
            *sample = 0.0;
        }

        // 3. Apply master limiter.
        self.limiter.process_block(output);

        // 4. Compact the timeline when enough has been consumed.
        if self.cursor >= COMPACT_THRESHOLD {
            self.timeline.drain(..self.cursor);
            self.cursor = 0;
        }
    }

    /// Sum `data` into the timeline starting at the playback cursor,
    /// growing the timeline as needed.
    fn mix_at_cursor(&mut self, data: &[f32]) {
        let end = self.cursor + data.len();
        if self.timeline.len() < end {
            self.timeline.resize(end, 0.0);
        }
        for (slot, &s) in self.timeline[self.cursor..end].iter_mut().zip(data) {
            *slot += s;
        }
    }
}
