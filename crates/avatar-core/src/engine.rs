//! One activation of a particle mode: the point set, its clock and the
//! per-frame rotate → displace → project → draw pass.

use crate::config::EngineConfig;
use crate::draw::Surface;
use crate::mode::Mode;
use crate::particles::Particle;
use crate::scenes::{Clock, Scene};

pub struct ParticleField {
    scene: Scene,
    size: f32,
    speed: f32,
    first_timestamp: Option<f64>,
    last_timestamp: f64,
    elapsed_ms: f64,
    frames: u64,
}

impl ParticleField {
    /// Builds the point set for `mode`. Returns `None` for the eye, which has
    /// no particles.
    pub fn new(mode: Mode, size: f32, config: &EngineConfig) -> Option<Self> {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        let scene = Scene::build(mode, size, config)?;
        log::debug!(
            "[field] built {} with {} particles at {}px",
            mode,
            scene.particles().len(),
            size
        );
        Some(Self {
            scene,
            size,
            speed: config.global_speed,
            first_timestamp: None,
            last_timestamp: 0.0,
            elapsed_ms: 0.0,
            frames: 0,
        })
    }

    pub fn mode(&self) -> Mode {
        self.scene.mode()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        self.scene.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.scene.particles().len()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The active scene's time accumulator.
    pub fn time(&self) -> f64 {
        self.scene.time()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances by the time since the previous tick and redraws the whole
    /// surface. The first tick has a zero delta so time starts at 0.
    pub fn tick(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) {
        let first = *self.first_timestamp.get_or_insert(timestamp_ms);
        // Timestamps that run backwards are treated as a pause.
        let delta = if self.frames == 0 {
            0.0
        } else {
            (timestamp_ms - self.last_timestamp).max(0.0)
        };
        self.last_timestamp = timestamp_ms.max(self.last_timestamp);
        self.elapsed_ms = (self.last_timestamp - first).max(0.0);
        self.frames += 1;

        let clock = Clock {
            delta_ms: delta,
            elapsed_ms: self.elapsed_ms,
            speed: self.speed,
        };
        surface.clear(self.size, self.size);
        self.scene.advance(&clock);
        self.scene.draw(surface);
    }
}
