use super::{Clock, Viewport};
use crate::config::VoxelConfig;
use crate::draw::{draw_dot, DotStyle, Surface};
use crate::math::{eased_sweep, rotate_yx, scan_influence, turn};
use crate::particles::{lattice_points, Particle};

/// Tumbling 5×5×5 lattice that bulges outward where the scan plane passes.
pub struct VoxelMatrixMorph {
    cfg: VoxelConfig,
    view: Viewport,
    particles: Vec<Particle>,
    time: f64,
}

impl VoxelMatrixMorph {
    pub fn new(view: Viewport, cfg: &VoxelConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            view,
            particles: lattice_points(&cfg.lattice),
            time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Scan plane y in rotated object space.
    pub fn scan_line(&self) -> f32 {
        let lattice = &self.cfg.lattice;
        let total = lattice.grid_size.saturating_sub(1) as f32 * lattice.spacing;
        eased_sweep(turn(self.time, 2.0)) * (total / 2.0 + self.cfg.scan_margin)
    }

    pub fn advance(&mut self, clock: &Clock) {
        self.time += clock.step(self.cfg.time_rate);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let rot_x = turn(self.time, self.cfg.rot_x_rate);
        let rot_y = turn(self.time, self.cfg.rot_y_rate);
        let scan = self.scan_line();
        let range = self.cfg.depth_range.max(f32::EPSILON);

        for p in &self.particles {
            let q = rotate_yx(p.position, rot_y, rot_x);
            let influence = scan_influence(q.y - scan, self.cfg.scan_width);
            let stretch = 1.0 + influence * self.cfg.morph;
            let depth = (q.z + range) / (range * 2.0);
            let screen = self.view.center + q.truncate() * stretch;
            let style = DotStyle::new(
                depth * 2.0 + influence * 2.0,
                (depth * 0.7 + influence * 0.3).max(0.1),
            );
            draw_dot(surface, screen, style);
        }
    }
}
