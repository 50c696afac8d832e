use super::{Clock, Viewport};
use crate::config::HelixConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{scan_influence, trail_influence, turn};
use crate::particles::{helix_points, Particle};
use glam::Vec2;
use std::f32::consts::TAU;

/// Spinning single strand with a scan line that oscillates along its height
/// and leaves a fading trail.
pub struct HelixScanner {
    cfg: HelixConfig,
    view: Viewport,
    particles: Vec<Particle>,
    time: f64,
}

impl HelixScanner {
    pub fn new(view: Viewport, cfg: &HelixConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            particles: helix_points(cfg),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    fn phase(&self) -> f32 {
        turn(self.time, TAU / self.cfg.loop_duration)
    }

    pub fn scan_y(&self) -> f32 {
        self.phase().sin() * (self.cfg.height / 2.0)
    }

    /// True while the scan line moves towards +y.
    pub fn advancing(&self) -> bool {
        self.phase().cos() > 0.0
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let r = self.cfg.radius.max(f32::EPSILON);
        let scan_y = self.scan_y();
        let advancing = self.advancing();
        let trail_len = self.cfg.height * self.cfg.trail_fraction;
        let spin = turn(self.time, 1.0);

        for p in &self.particles {
            let Some(polar) = p.polar else { continue };
            let angle = polar.angle + spin;
            let x = r * angle.cos();
            let z = r * angle.sin();
            let y = p.position.y;
            let depth = (z + r) / (r * 2.0);

            let lead = scan_influence(y - scan_y, self.cfg.scan_width);
            let behind = if advancing { scan_y - y } else { y - scan_y };
            let trail = trail_influence(behind, trail_len, self.cfg.trail_strength);
            let influence = lead.max(trail);

            let screen = self.view.center + Vec2::new(x, y);
            let style = DotStyle::new(
                depth * 1.8 + influence * 2.8,
                depth * 0.4 + influence * 0.6,
            );
            draw_dot(surface, screen, style);
        }
    }
}
