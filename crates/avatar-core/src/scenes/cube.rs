use super::{Clock, Viewport};
use crate::config::CubeConfig;
use crate::draw::{draw_depth_sorted, DepthPoint, DotStyle, Surface};
use crate::math::{eased_scan_influence, perspective_scale, rotate_yx, turn, wrap};
use crate::particles::{lattice_points, Particle};

const MIN_DOT: f32 = 0.1;

/// 7×7×7 lattice refracted by a spherical wavefront expanding from its
/// center.
pub struct CubeRefraction {
    cfg: CubeConfig,
    view: Viewport,
    particles: Vec<Particle>,
    max_dist: f32,
    time: f64,
    wave_radius: f32,
    frame: Vec<DepthPoint>,
}

impl CubeRefraction {
    pub fn new(view: Viewport, cfg: &CubeConfig) -> Self {
        let particles = lattice_points(&cfg.lattice);
        let half = cfg.lattice.grid_size.saturating_sub(1) as f32 * cfg.lattice.spacing / 2.0;
        Self {
            cfg: cfg.clone(),
            view,
            frame: Vec::with_capacity(particles.len()),
            particles,
            max_dist: half * 3.0_f32.sqrt(),
            time: 0.0,
            wave_radius: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn wave_radius(&self) -> f32 {
        self.wave_radius
    }

    /// Outward push for a point `dist` from the lattice center.
    pub fn displacement(&self, dist: f32) -> f32 {
        eased_scan_influence(dist - self.wave_radius, self.cfg.wave_width / 2.0)
            * self.cfg.max_displacement
    }

    pub fn last_frame(&self) -> &[DepthPoint] {
        &self.frame
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
        // The wavefront runs on wall time, independent of the rotation clock.
        self.wave_radius = wrap(
            clock.elapsed_ms * f64::from(self.cfg.wave_rate * clock.speed),
            self.max_dist * self.cfg.period_factor,
        );
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let rot_x = turn(self.time, self.cfg.rot_x_rate);
        let rot_y = turn(self.time, self.cfg.rot_y_rate);
        let max = self.cfg.max_displacement.max(f32::EPSILON);

        self.frame.clear();
        for p in &self.particles {
            let dist = p.position.length();
            let displacement = self.displacement(dist);
            let pushed = if displacement > 0.0 && dist > 0.0 {
                p.position * ((dist + displacement) / dist)
            } else {
                p.position
            };
            let q = rotate_yx(pushed, rot_y, rot_x);
            let scale = perspective_scale(q.z, self.cfg.fov, 0.0);
            let influence = displacement / max;
            let style = DotStyle::new(
                (1.5 + influence * 2.5) * scale,
                (scale * 0.7 + influence * 0.4).max(0.1),
            );
            if style.size <= MIN_DOT {
                continue;
            }
            let screen = self.view.center + q.truncate() * scale;
            self.frame.push(DepthPoint::new(screen, q, style));
        }
        draw_depth_sorted(surface, &mut self.frame);
    }
}
