use serde::{Deserialize, Serialize};

use crate::constants::{FRAMES_PER_SECOND, FRICTION_PER_FRAME};

// Control points of the "soft friction" glide: cubic-bezier(0.2, 0.8, 0.2, 1)
const GLIDE: (f64, f64, f64, f64) = (0.2, 0.8, 0.2, 1.0);
const BISECTION_STEPS: usize = 48;
const MAX_LINEAR_SHARE: f64 = 0.95;

/// Maps normalized time to normalized progress. Every curve is
/// non-decreasing with `sample(0) == 0` and `sample(1) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionCurve {
    /// Single deceleration phase: `1 - (1 - t)^4`.
    EaseOutQuart,
    /// Constant speed for `linear_share` of the time covering
    /// `linear_distance` of the way, then a bezier glide into the target.
    TwoPhase { linear_share: f64, linear_distance: f64 },
    /// Velocity multiplied by `per_frame` every frame at 60 fps, rescaled so
    /// the wheel stops exactly on the target.
    Friction { per_frame: f64 },
}

impl Default for MotionCurve {
    fn default() -> Self {
        MotionCurve::EaseOutQuart
    }
}

impl MotionCurve {
    pub fn friction() -> Self {
        MotionCurve::Friction {
            per_frame: FRICTION_PER_FRAME,
        }
    }

    pub fn sample(&self, t: f64, duration_ms: f64) -> f64 {
        let t = clamp_unit(t);
        if t >= 1.0 {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }

        match *self {
            MotionCurve::EaseOutQuart => ease_out_quart(t),
            MotionCurve::TwoPhase {
                linear_share,
                linear_distance,
            } => two_phase(t, linear_share, linear_distance),
            MotionCurve::Friction { per_frame } => friction(t, per_frame, duration_ms),
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        1.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

// Modified ease-out: 1 - (1-t)^4
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

fn two_phase(t: f64, linear_share: f64, linear_distance: f64) -> f64 {
    let share = if linear_share.is_finite() {
        linear_share.clamp(0.0, MAX_LINEAR_SHARE)
    } else {
        0.0
    };
    let distance = if linear_distance.is_finite() {
        linear_distance.clamp(0.0, 1.0)
    } else {
        0.0
    };

    if share > 0.0 && t < share {
        return distance * t / share;
    }

    let u = (t - share) / (1.0 - share);
    let (x1, y1, x2, y2) = GLIDE;
    distance + (1.0 - distance) * cubic_bezier(x1, y1, x2, y2, u)
}

fn friction(t: f64, per_frame: f64, duration_ms: f64) -> f64 {
    let frames = duration_ms / 1000.0 * FRAMES_PER_SECOND;
    if !(per_frame > 0.0 && per_frame < 1.0) || !(frames.is_finite() && frames >= 1.0) {
        return t;
    }

    let total = 1.0 - per_frame.powf(frames);
    (1.0 - per_frame.powf(t * frames)) / total
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` evaluated at `x`. Assumes
/// `x1` and `x2` in `[0, 1]` so the x polynomial is monotonic.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let x = clamp_unit(x);
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if bezier_axis(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_axis(y1, y2, (lo + hi) / 2.0)
}

fn bezier_axis(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}
