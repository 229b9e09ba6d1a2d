use crate::foundation::error::{ReelError, ReelResult};

/// Frame rate used by the reference pipeline to convert seconds to frames at the boundary.
pub const DEFAULT_FPS: Fps = Fps { num: 30, den: 1 };

/// Rational frame rate (`num / den` frames per second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds); must be > 0.
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        DEFAULT_FPS
    }
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::config("fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::config("fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to whole frames, rounding down and clamping negatives to zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}
