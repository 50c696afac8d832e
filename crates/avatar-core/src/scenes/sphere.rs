use super::{Clock, Viewport};
use crate::config::SphereConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{eased_sweep, perspective_scale, rotate_yx, scan_influence, turn};
use crate::particles::{sphere_points, Particle};

/// Spiral point sphere with a horizontal scan band sweeping up and down.
pub struct SphereScan {
    cfg: SphereConfig,
    view: Viewport,
    radius: f32,
    particles: Vec<Particle>,
    time: f64,
}

impl SphereScan {
    pub fn new(view: Viewport, cfg: &SphereConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            radius: view.size * cfg.radius_fraction,
            particles: sphere_points(view.size, cfg),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current y of the scan band in rotated object space.
    pub fn scan_line(&self) -> f32 {
        eased_sweep(turn(self.time, self.cfg.scan_frequency)) * self.radius
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let rot_x = turn(self.time, self.cfg.tilt_frequency).sin() * self.cfg.tilt_amplitude;
        let rot_y = turn(self.time, self.cfg.spin_rate);
        let scan = self.scan_line();
        let r = self.radius.max(f32::EPSILON);
        let fov = r * self.cfg.fov_factor;

        // Occlusion is not noticeable on a sparse shell, so no depth sort.
        for p in &self.particles {
            let q = rotate_yx(p.position, rot_y, rot_x);
            let depth = (q.z + r * 1.5) / (r * 2.5);
            let persp = perspective_scale(q.z, fov, 0.0);
            let screen = self.view.center + q.truncate() * persp;
            let influence = scan_influence(q.y - scan, self.cfg.scan_width);
            let style = DotStyle::new(
                depth * 2.0 + influence * 2.5,
                depth * 0.6 + influence * 0.4,
            );
            draw_dot(surface, screen, style);
        }
    }
}
