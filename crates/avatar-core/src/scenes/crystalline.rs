use super::{Clock, Viewport};
use crate::config::CrystallineConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{eased_scan_influence, wrap};
use crate::particles::{grid_points, Particle};

/// Flat grid pushed outward by an expanding circular wavefront.
pub struct CrystallineRefraction {
    cfg: CrystallineConfig,
    view: Viewport,
    particles: Vec<Particle>,
    time: f64,
}

impl CrystallineRefraction {
    pub fn new(view: Viewport, cfg: &CrystallineConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            particles: grid_points(view.size, cfg.grid_size),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn wave_radius(&self) -> f32 {
        wrap(self.time, self.view.size * self.cfg.period_factor)
    }

    /// Outward displacement in pixels for a point `dist` from the center.
    pub fn displacement(&self, dist: f32) -> f32 {
        eased_scan_influence(dist - self.wave_radius(), self.cfg.wave_width / 2.0)
            * self.cfg.max_displacement
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let max = self.cfg.max_displacement.max(f32::EPSILON);
        for p in &self.particles {
            let offset = p.position.truncate() - self.view.center;
            let displacement = self.displacement(offset.length());
            let screen = p.position.truncate() + offset.normalize_or_zero() * displacement;
            let influence = displacement.abs() / max;
            draw_dot(
                surface,
                screen,
                DotStyle::new(1.2 + influence * 2.0, 0.2 + influence * 0.8),
            );
        }
    }
}
