use super::{Clock, Viewport};
use crate::config::CylinderConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{eased_sweep, scan_influence, turn};
use crate::particles::{cylinder_points, Particle};
use glam::Vec2;

/// Counter-rotating stacked layers read by a horizontal scan band.
pub struct CylindricalAnalysis {
    cfg: CylinderConfig,
    view: Viewport,
    particles: Vec<Particle>,
    time: f64,
}

impl CylindricalAnalysis {
    pub fn new(view: Viewport, cfg: &CylinderConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            particles: cylinder_points(cfg),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Scan band position in canvas pixels.
    pub fn scan_y(&self) -> f32 {
        self.view.center.y + eased_sweep(turn(self.time, 2.0)) * (self.cfg.height / 2.0)
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let r = self.cfg.radius.max(f32::EPSILON);
        let scan_y = self.scan_y();

        for p in &self.particles {
            let Some(polar) = p.polar else { continue };
            // odd layers spin faster
            let spin = turn(self.time, 0.2 + (polar.ring % 2) as f32 * 0.1);
            let angle = polar.angle + spin;
            let x = angle.cos() * r;
            let z = angle.sin() * r;
            let depth = (z + r) / (r * 2.0);
            let screen = Vec2::new(
                self.view.center.x + x * depth,
                self.view.center.y + p.position.y,
            );
            let influence = scan_influence(screen.y - scan_y, self.cfg.scan_width);
            let style = DotStyle::new(
                depth * 1.5 + influence * 2.0,
                depth * 0.5 + influence * 0.5,
            );
            draw_dot(surface, screen, style);
        }
    }
}
