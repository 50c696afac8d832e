use super::{Clock, Viewport};
use crate::config::PhasedArrayConfig;
use crate::draw::{draw_depth_sorted, DepthPoint, DotStyle, Surface};
use crate::math::{eased_scan_influence, perspective_scale, rotate_yx, turn, wrap};
use crate::particles::{ring_points, Particle};
use glam::Vec3;

/// Smallest dot worth issuing after perspective.
const MIN_DOT: f32 = 0.1;

/// Tilted emitter disc; a radial pulse lifts the rings out of the plane as it
/// travels outward.
pub struct PhasedArrayEmitter {
    cfg: PhasedArrayConfig,
    view: Viewport,
    particles: Vec<Particle>,
    max_radius: f32,
    time: f64,
    frame: Vec<DepthPoint>,
}

impl PhasedArrayEmitter {
    pub fn new(view: Viewport, cfg: &PhasedArrayConfig) -> Self {
        let particles = ring_points(&cfg.rings);
        let max_radius = cfg.rings.iter().map(|r| r.radius).fold(0.0, f32::max);
        Self {
            cfg: cfg.clone(),
            view,
            frame: Vec::with_capacity(particles.len()),
            particles,
            max_radius,
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
        wrap(
            self.time * f64::from(self.cfg.wave_speed),
            self.max_radius * self.cfg.period_factor,
        )
    }

    /// Points issued last frame, in draw order.
    pub fn last_frame(&self) -> &[DepthPoint] {
        &self.frame
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let rot_y = turn(self.time, self.cfg.spin_rate);
        let rot_x = self.cfg.tilt;
        let wave = self.wave_radius();
        let half = self.cfg.wave_width / 2.0;

        self.frame.clear();
        for p in &self.particles {
            let flat = p.position;
            let influence = eased_scan_influence(flat.truncate().length() - wave, half);
            let lifted = Vec3::new(flat.x, flat.y, influence * self.cfg.wave_height);
            let q = rotate_yx(lifted, rot_y, rot_x);
            let scale = perspective_scale(q.z, self.cfg.fov, self.cfg.depth_offset);
            let style = DotStyle::new(
                (1.5 + influence * 2.5) * scale,
                0.4 + influence * 0.6,
            );
            if style.size < MIN_DOT {
                continue;
            }
            let screen = self.view.center + q.truncate() * scale;
            self.frame.push(DepthPoint::new(screen, q, style));
        }
        draw_depth_sorted(surface, &mut self.frame);
    }
}
