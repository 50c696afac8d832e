use super::{Clock, Viewport};
use crate::config::SonarConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{angular_distance, ease_in_out_cubic, turn};
use crate::particles::{sonar_points, Particle};
use glam::Vec2;

/// Brightness of a ring dot `since_ms` after the sweep last crossed it.
/// 1 right after the pass, eased down to 0 at `fade_ms`.
pub fn sonar_brightness(since_ms: f32, fade_ms: f32) -> f32 {
    if fade_ms <= 0.0 {
        return 0.0;
    }
    let t = (since_ms.max(0.0) / fade_ms).min(1.0);
    1.0 - ease_in_out_cubic(t)
}

/// Rotating sweep line over concentric rings. The only scene with memory
/// across frames: each dot keeps the time it was last swept.
pub struct SonarSweep {
    cfg: SonarConfig,
    view: Viewport,
    particles: Vec<Particle>,
    last_seen: Vec<f64>,
    now_ms: f64,
    sweep_angle: f32,
}

impl SonarSweep {
    pub fn new(view: Viewport, cfg: &SonarConfig) -> Self {
        let particles = sonar_points(cfg);
        // Unseen dots start fully decayed.
        let last_seen = vec![-f64::from(cfg.fade_ms); particles.len()];
        Self {
            cfg: cfg.clone(),
            view,
            particles,
            last_seen,
            now_ms: 0.0,
            sweep_angle: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.now_ms
    }

    pub fn sweep_angle(&self) -> f32 {
        self.sweep_angle
    }

    pub fn last_seen(&self) -> &[f64] {
        &self.last_seen
    }

    pub fn brightness(&self, index: usize) -> f32 {
        self.last_seen
            .get(index)
            .map(|seen| sonar_brightness((self.now_ms - seen) as f32, self.cfg.fade_ms))
            .unwrap_or(0.0)
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.now_ms = clock.elapsed_ms;
        self.sweep_angle = turn(self.now_ms, 0.001 * self.cfg.sweep_rate * clock.speed);
        for (p, seen) in self.particles.iter().zip(self.last_seen.iter_mut()) {
            let Some(polar) = p.polar else { continue };
            if angular_distance(polar.angle, self.sweep_angle) < self.cfg.sweep_epsilon {
                *seen = self.now_ms;
            }
        }
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let c = self.view.center;
        let tip = c + Vec2::from_angle(self.sweep_angle) * self.cfg.sweep_length;
        surface.stroke_line(c, tip, 1.0, self.cfg.sweep_opacity);

        for (i, p) in self.particles.iter().enumerate() {
            if self.now_ms - self.last_seen[i] >= f64::from(self.cfg.fade_ms) {
                continue;
            }
            let opacity = self.brightness(i);
            let screen = c + p.position.truncate();
            draw_dot(surface, screen, DotStyle::new(1.0 + opacity * 1.5, opacity));
        }
    }
}
