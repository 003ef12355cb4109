use super::constants::CLOSENESS_EXPONENT;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into (-π, π]. Non-finite input maps to 0.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    if !a.is_finite() {
        return 0.0;
    }
    if a > -PI && a <= PI {
        return a;
    }
    let r = (a + PI).rem_euclid(TAU) - PI;
    // rem_euclid lands on [-π, π); fold the lower edge onto +π
    if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Signed shortest rotation that takes `from` onto `to`.
#[inline]
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

/// How close `angle` is to `target`, shaped into [0, 1].
///
/// Stays near zero until the angle is within roughly ±25° of the target,
/// then climbs steeply to exactly 1 at a perfect match.
#[inline]
pub fn closeness(angle: f64, target: f64) -> f64 {
    let d = wrap_angle(angle - target);
    let u = ((d.cos() + 1.0) * 0.5).clamp(0.0, 1.0);
    u.powi(CLOSENESS_EXPONENT)
}

#[inline]
pub fn drag_to_angle_delta(dx_px: f64, radians_per_px: f64) -> f64 {
    if dx_px.is_finite() {
        dx_px * radians_per_px
    } else {
        0.0
    }
}

// The slider spans exactly one turn, so both directions are a wrap.
#[inline]
pub fn slider_to_angle(value: f64) -> f64 {
    wrap_angle(value)
}

#[inline]
pub fn angle_to_slider(angle: f64) -> f64 {
    wrap_angle(angle)
}

/// Opening control angle for a puzzle hiding `target`.
///
/// Normally 0, but a target that already sits inside the `window` around 0
/// would start solved, so those begin half a turn away instead.
pub fn start_angle(target: f64, window: f64) -> f64 {
    if closeness(0.0, target) < window {
        0.0
    } else {
        wrap_angle(target + PI)
    }
}

/// Draw a fresh hidden target in [0, 2π).
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..TAU)
}
