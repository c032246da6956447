//! Master limiter — hard clamp so a six-note strum landing on top of a
//! ringing tail cannot clip the output.

/// Hard limiter that clamps a buffer to `[-ceiling, ceiling]`.
///
/// Runs once per callback on the finished output block; there is no
/// per-sample path.
#[derive(Debug, Clone)]
pub struct Limiter {
    ceiling: f32,
}

impl Limiter {
    /// Create a new limiter with the given ceiling (should be in `(0.0, 1.0]`).
    pub fn new(ceiling: f32) -> Self {
        debug_assert!(ceiling > 0.0 && ceiling <= 1.0);
        Self { ceiling }
    }

    /// Clamp an entire buffer in-place.
    #[inline]
    pub fn process_block(&self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = sample.clamp(-self.ceiling, self.ceiling);
        }
    }

    /// Returns the current ceiling value.
    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }
}

impl Default for Limiter {
    fn default() -> Self {
        Self { ceiling: 0.95 }
    }
}
