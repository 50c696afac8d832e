//! Closed-form point-set generators, one per particle mode.
//!
//! Every generator is pure: the same inputs always produce the same points in
//! the same order, and nothing here draws on randomness.

use crate::config::{
    CylinderConfig, HelixConfig, LatticeConfig, RingSpec, SonarConfig, SphereConfig,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Polar description kept for ring, strand and layer particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub radius: f32,
    pub angle: f32,
    /// Ring, layer or strand index the particle belongs to.
    pub ring: usize,
}

/// A point in object space. Scenes never mutate these after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub polar: Option<Polar>,
}

impl Particle {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            polar: None,
        }
    }

    pub fn on_ring(radius: f32, angle: f32, ring: usize, y: f32) -> Self {
        Self {
            position: Vec3::new(radius * angle.cos(), y, radius * angle.sin()),
            polar: Some(Polar {
                radius,
                angle,
                ring,
            }),
        }
    }

    /// Flat ring point in the xy-plane (z = 0).
    pub fn on_flat_ring(radius: f32, angle: f32, ring: usize) -> Self {
        Self {
            position: Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0),
            polar: Some(Polar {
                radius,
                angle,
                ring,
            }),
        }
    }
}

/// Near-uniform spiral over a sphere of radius `radius_fraction * size`.
pub fn sphere_points(size: f32, cfg: &SphereConfig) -> Vec<Particle> {
    let n = cfg.dot_count;
    let radius = size * cfg.radius_fraction;
    let spiral = (n as f32 * PI).sqrt();
    (0..n)
        .map(|i| {
            let theta = (1.0 - 2.0 * (i as f32 / n as f32)).acos();
            let phi = spiral * theta;
            Particle::at(Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            ))
        })
        .collect()
}

/// `grid_size × grid_size` points covering the canvas, row-major, in canvas
/// pixel coordinates.
pub fn grid_points(size: f32, grid_size: usize) -> Vec<Particle> {
    if grid_size < 2 {
        return vec![Particle::at(Vec3::new(size / 2.0, size / 2.0, 0.0)); grid_size];
    }
    let spacing = size / (grid_size - 1) as f32;
    let mut dots = Vec::with_capacity(grid_size * grid_size);
    for r in 0..grid_size {
        for c in 0..grid_size {
            dots.push(Particle::at(Vec3::new(
                c as f32 * spacing,
                r as f32 * spacing,
                0.0,
            )));
        }
    }
    dots
}

/// Concentric sonar rings. Each ring holds `ceil(r / 2)` points spaced by
/// `2π / (r / 2)`, so the dot density grows with the radius. A non-positive
/// ring step yields no rings.
pub fn sonar_points(cfg: &SonarConfig) -> Vec<Particle> {
    let mut dots = Vec::new();
    if cfg.ring_step <= 0.0 {
        return dots;
    }
    let mut r = cfg.ring_min;
    let mut ring = 0;
    while r <= cfg.ring_max {
        let half = r / 2.0;
        let count = half.ceil() as usize;
        for i in 0..count {
            let angle = (i as f32 / half) * TAU;
            dots.push(Particle::on_flat_ring(r, angle, ring));
        }
        r += cfg.ring_step;
        ring += 1;
    }
    dots
}

/// Single strand: constant angular step, heights spread linearly around 0.
pub fn helix_points(cfg: &HelixConfig) -> Vec<Particle> {
    let n = cfg.dot_count;
    (0..n)
        .map(|i| {
            let angle = i as f32 * cfg.angle_step;
            let y = (i as f32 / n as f32) * cfg.height - cfg.height / 2.0;
            Particle::on_ring(cfg.radius, angle, 0, y)
        })
        .collect()
}

/// Flat concentric rings, ring-major order.
pub fn ring_points(rings: &[RingSpec]) -> Vec<Particle> {
    let mut dots = Vec::with_capacity(rings.iter().map(|r| r.count).sum());
    for (ring, spec) in rings.iter().enumerate() {
        for j in 0..spec.count {
            let angle = (j as f32 / spec.count as f32) * TAU;
            dots.push(Particle::on_flat_ring(spec.radius, angle, ring));
        }
    }
    dots
}

/// Stacked circular layers around the y axis; `ring` is the layer index.
pub fn cylinder_points(cfg: &CylinderConfig) -> Vec<Particle> {
    let mut dots = Vec::with_capacity(cfg.layers * cfg.dots_per_layer);
    let denom = cfg.layers.saturating_sub(1).max(1) as f32;
    for layer in 0..cfg.layers {
        let y = (layer as f32 / denom - 0.5) * cfg.height;
        for j in 0..cfg.dots_per_layer {
            let angle = (j as f32 / cfg.dots_per_layer as f32) * TAU;
            dots.push(Particle::on_ring(cfg.radius, angle, layer, y));
        }
    }
    dots
}

/// Cubic lattice centered at the origin, x-major then y then z.
pub fn lattice_points(cfg: &LatticeConfig) -> Vec<Particle> {
    let n = cfg.grid_size;
    let half = (n.saturating_sub(1)) as f32 * cfg.spacing / 2.0;
    let mut dots = Vec::with_capacity(n * n * n);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                dots.push(Particle::at(Vec3::new(
                    x as f32 * cfg.spacing - half,
                    y as f32 * cfg.spacing - half,
                    z as f32 * cfg.spacing - half,
                )));
            }
        }
    }
    dots
}

/// Start offset of every ring inside a ring-major point list.
pub fn ring_offsets(rings: &[RingSpec]) -> Vec<usize> {
    rings
        .iter()
        .scan(0, |acc, r| {
            let start = *acc;
            *acc += r.count;
            Some(start)
        })
        .collect()
}
