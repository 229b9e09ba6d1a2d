use std::f64::consts::PI;

/// Easing functions used to map normalized animation progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1`. [`Ease::OutBack`] and [`Ease::OutElastic`] leave
/// `[0, 1]` mid-curve; that overshoot is what gives playful entrances their bounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in.
    InExpo,
    /// Ease-out with a small overshoot past the target.
    OutBack,
    /// Ease-out that bounces against the target.
    OutBounce,
    /// Ease-out with a decaying oscillation around the target.
    OutElastic,
}

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;
const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

impl Ease {
    /// Apply this easing function to normalized progress `t`; `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
            }
            Self::OutBounce => out_bounce(t),
            Self::OutElastic => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
                }
            }
        }
    }
}

fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Interpolate between `from` and `to` at eased `progress`.
pub fn interpolate(progress: f64, from: f64, to: f64, ease: Ease) -> f64 {
    let e = ease.apply(progress);
    from + (to - from) * e
}

/// Blend two hex colors channel-wise at eased `progress`, returning `#rrggbb`.
///
/// Accepts `#rgb` and `#rrggbb` (leading `#` optional). Malformed input is read as black.
/// Overshooting curves are clamped per channel.
pub fn interpolate_color(progress: f64, from_hex: &str, to_hex: &str, ease: Ease) -> String {
    let e = ease.apply(progress);
    let a = parse_hex_rgb(from_hex).unwrap_or([0, 0, 0]);
    let b = parse_hex_rgb(to_hex).unwrap_or([0, 0, 0]);

    let out: [u8; 3] = std::array::from_fn(|i| {
        let (ca, cb) = (f64::from(a[i]), f64::from(b[i]));
        (ca + (cb - ca) * e).round().clamp(0.0, 255.0) as u8
    });
    format!("#{:02x}{:02x}{:02x}", out[0], out[1], out[2])
}

/// Parse `#rgb` / `#rrggbb` into RGB bytes.
pub fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
