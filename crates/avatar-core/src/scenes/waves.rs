use super::{Clock, Viewport};
use crate::config::WavesConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::turn;
use crate::particles::{ring_offsets, ring_points, Particle};
use glam::Vec2;
use std::f32::consts::TAU;

/// Breathing concentric rings, each point linked to its children on the next
/// ring out. Lines go down first so the dots sit on top.
pub struct InterconnectingWaves {
    cfg: WavesConfig,
    view: Viewport,
    particles: Vec<Particle>,
    offsets: Vec<usize>,
    time: f64,
}

impl InterconnectingWaves {
    pub fn new(view: Viewport, cfg: &WavesConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            particles: ring_points(&cfg.rings),
            offsets: ring_offsets(&cfg.rings),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Radial displacement of ring `ring` this frame.
    pub fn pulse(&self, ring: usize) -> f32 {
        (turn(self.time, 2.0) - ring as f32 * 0.4).sin() * self.cfg.pulse_amplitude
    }

    fn on_ring(&self, ring: usize, angle: f32) -> Vec2 {
        let radius = self.cfg.rings[ring].radius + self.pulse(ring);
        self.view.center + Vec2::from_angle(angle) * radius
    }

    /// Number of line segments drawn per frame.
    pub fn link_count(&self) -> usize {
        self.cfg
            .rings
            .windows(2)
            .map(|w| w[0].count * children_per_point(w[0].count, w[1].count))
            .sum()
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let t = turn(self.time, 3.0);
        let rings = &self.cfg.rings;

        for k in 0..rings.len().saturating_sub(1) {
            let (ring, next) = (rings[k], rings[k + 1]);
            if ring.count == 0 || next.count == 0 {
                continue;
            }
            let ratio = next.count as f32 / ring.count as f32;
            let children = children_per_point(ring.count, next.count);
            for i in 0..ring.count {
                let from = self.on_ring(k, i as f32 / ring.count as f32 * TAU);
                let opacity = 0.1
                    + (((t - k as f32 * 0.5 + i as f32 * 0.3).sin() + 1.0) / 2.0) * 0.4;
                for j in 0..children {
                    let slot = i as f32 * ratio + j as f32;
                    let to = self.on_ring(k + 1, slot / next.count as f32 * TAU);
                    surface.stroke_line(from, to, self.cfg.line_width, opacity);
                }
            }
        }

        for (idx, p) in self.particles.iter().enumerate() {
            let Some(polar) = p.polar else { continue };
            let i = idx - self.offsets[polar.ring];
            let screen = self.on_ring(polar.ring, polar.angle);
            let opacity = 0.4 + (t * 2.0 - polar.ring as f32 * 0.4 + i as f32 * 0.2).sin() * 0.6;
            draw_dot(surface, screen, DotStyle::new(self.cfg.dot_radius, opacity));
        }
    }
}

/// Links fanning out from one point: `ceil(next / count)`.
fn children_per_point(count: usize, next: usize) -> usize {
    if count == 0 {
        return 0;
    }
    next.div_ceil(count)
}
