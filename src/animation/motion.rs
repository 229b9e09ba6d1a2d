use crate::foundation::core::Fps;

/// Physical parameters for spring-like motion.
///
/// Progress follows a damped harmonic oscillator released from rest at `0` toward `1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Friction coefficient; higher values settle with less oscillation.
    pub damping: f64,
    /// Spring constant; higher values move faster.
    pub stiffness: f64,
    /// Mass of the moving element; higher values respond more slowly.
    pub mass: f64,
    /// Clamp progress at `1` instead of overshooting.
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Soft, slightly underdamped motion.
    pub const GENTLE: Self = Self {
        damping: 18.0,
        stiffness: 120.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Heavily damped motion with no visible overshoot.
    pub const SMOOTH: Self = Self {
        damping: 26.0,
        stiffness: 100.0,
        mass: 1.0,
        overshoot_clamping: true,
    };

    /// Fast motion that settles quickly.
    pub const SNAPPY: Self = Self {
        damping: 20.0,
        stiffness: 200.0,
        mass: 0.5,
        overshoot_clamping: false,
    };

    /// Low damping; visibly bounces around the target.
    pub const BOUNCY: Self = Self {
        damping: 8.0,
        stiffness: 180.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Damping ratio (`< 1` underdamped, `1` critical, `> 1` overdamped).
    pub fn damping_ratio(&self) -> f64 {
        let denom = 2.0 * (self.stiffness * self.mass).sqrt();
        if denom > 0.0 {
            self.damping.max(0.0) / denom
        } else {
            f64::INFINITY
        }
    }
}

const SETTLE_TOLERANCE: f64 = 0.005;
const SETTLE_LIMIT_SECS: f64 = 10.0;

/// Sample spring progress at `frame`. Deterministic and closed-form.
///
/// Degenerate configs (non-positive mass or stiffness, non-finite values) snap to `1`.
pub fn spring_progress(frame: u64, fps: Fps, config: &SpringConfig) -> f64 {
    let SpringConfig {
        damping,
        stiffness,
        mass,
        overshoot_clamping,
    } = *config;
    if !(stiffness.is_finite() && mass.is_finite() && damping.is_finite())
        || stiffness <= 0.0
        || mass <= 0.0
    {
        return 1.0;
    }

    let t = fps.frames_to_secs(frame);
    let omega0 = (stiffness / mass).sqrt();
    let zeta = config.damping_ratio();

    // Displacement from target, starting at -1 with zero velocity.
    let y = if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        decay * (-(omega_d * t).cos() - (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else if (zeta - 1.0).abs() < 1e-9 {
        -(1.0 + omega0 * t) * (-omega0 * t).exp()
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega0 * (zeta - root);
        let r2 = -omega0 * (zeta + root);
        let a = r2 / (r1 - r2);
        let b = -1.0 - a;
        a * (r1 * t).exp() + b * (r2 * t).exp()
    };

    let progress = 1.0 + y;
    if overshoot_clamping {
        progress.min(1.0)
    } else {
        progress
    }
}

/// First frame after which the spring stays within a small tolerance of its target.
///
/// Scans at most ten seconds of frames; springs that have not settled by then report the limit.
pub fn spring_settle_frames(fps: Fps, config: &SpringConfig) -> u64 {
    let limit = fps.secs_to_frames_floor(SETTLE_LIMIT_SECS);
    let mut settled_at = None;
    for frame in 0..=limit {
        let off = (spring_progress(frame, fps, config) - 1.0).abs();
        match (off <= SETTLE_TOLERANCE, settled_at) {
            (true, None) => settled_at = Some(frame),
            (false, Some(_)) => settled_at = None,
            _ => {}
        }
    }
    settled_at.unwrap_or(limit)
}

/// Entrance delays for `count` elements: `base, base + step, base + 2*step, ...`.
pub fn stagger_delays(count: usize, base: u64, step: u64) -> Vec<u64> {
    (0..count as u64)
        .map(|i| base.saturating_add(i.saturating_mul(step)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
