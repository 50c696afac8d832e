//! Rotation, projection and easing helpers shared by every particle scene.
//!
//! Conventions: angles are radians, rotations are applied about the origin of
//! object space, and projection happens after rotation.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};
use std::f64::consts::TAU;

/// Cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Maps a sine wave onto an eased `[-1, 1]` sweep, the shape shared by the
/// back-and-forth scan lines.
#[inline]
pub fn eased_sweep(phase: f32) -> f32 {
    ease_in_out_cubic((phase.sin() + 1.0) / 2.0) * 2.0 - 1.0
}

#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}

#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

/// Y rotation followed by X rotation. The order is load-bearing: scan
/// distances and projection read the result.
#[inline]
pub fn rotate_yx(p: Vec3, rot_y: f32, rot_x: f32) -> Vec3 {
    rotate_x(rotate_y(p, rot_y), rot_x)
}

/// Perspective divide factor applied to x and y before centering.
#[inline]
pub fn perspective_scale(z: f32, fov: f32, offset: f32) -> f32 {
    fov / (fov + z + offset)
}

/// Smooth peak around a scan feature: 1 at zero distance, falling to 0 at
/// `half_width`, 0 beyond.
#[inline]
pub fn scan_influence(distance: f32, half_width: f32) -> f32 {
    let d = distance.abs();
    if half_width <= 0.0 || d >= half_width {
        return 0.0;
    }
    (d / half_width * FRAC_PI_2).cos().clamp(0.0, 1.0)
}

/// Eased variant used by the traveling wavefronts.
#[inline]
pub fn eased_scan_influence(distance: f32, half_width: f32) -> f32 {
    ease_in_out_cubic(scan_influence(distance, half_width))
}

/// Quadratic glow left behind a moving scan line. `behind` is the signed
/// distance measured against the direction of travel (positive = behind).
#[inline]
pub fn trail_influence(behind: f32, trail_length: f32, strength: f32) -> f32 {
    if behind <= 0.0 || behind >= trail_length {
        return 0.0;
    }
    (1.0 - behind / trail_length).powi(2) * strength
}

/// Shortest angular distance between two angles, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(2.0 * PI);
    if d > PI {
        2.0 * PI - d
    } else {
        d
    }
}

/// Non-negative modulo of a time accumulator, reduced in `f64` and only then
/// narrowed.
#[inline]
pub fn wrap(value: f64, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(f64::from(period)) as f32
}

/// Angle `time * rate` reduced to `[0, 2π)` before narrowing to `f32`.
#[inline]
pub fn turn(time: f64, rate: f32) -> f32 {
    (time * f64::from(rate)).rem_euclid(TAU) as f32
}
