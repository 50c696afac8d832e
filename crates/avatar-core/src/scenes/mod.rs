//! Per-mode scenes: each pairs a generator (`new`) with an updater
//! (`advance` + `draw`). [`Scene`] is the single dispatch point used by the
//! tick loop.

mod crystalline;
mod cube;
mod cylinder;
mod helix;
mod phased_array;
mod sonar;
mod sphere;
mod voxel;
mod waves;

pub use crystalline::CrystallineRefraction;
pub use cube::CubeRefraction;
pub use cylinder::CylindricalAnalysis;
pub use helix::HelixScanner;
pub use phased_array::PhasedArrayEmitter;
pub use sonar::{sonar_brightness, SonarSweep};
pub use sphere::SphereScan;
pub use voxel::VoxelMatrixMorph;
pub use waves::InterconnectingWaves;

use crate::config::EngineConfig;
use crate::draw::Surface;
use crate::mode::Mode;
use crate::particles::Particle;
use glam::Vec2;

/// Timing handed to a scene for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    /// Real milliseconds since the previous tick (0 on the first tick).
    pub delta_ms: f64,
    /// Real milliseconds since activation.
    pub elapsed_ms: f64,
    pub speed: f32,
}

impl Clock {
    /// Accumulator increment for a per-millisecond rate.
    #[inline]
    pub fn step(&self, rate: f32) -> f64 {
        self.delta_ms * f64::from(rate) * f64::from(self.speed)
    }
}

/// Square drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: f32,
    pub center: Vec2,
}

impl Viewport {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            center: Vec2::splat(size / 2.0),
        }
    }
}

pub enum Scene {
    SphereScan(SphereScan),
    CrystallineRefraction(CrystallineRefraction),
    SonarSweep(SonarSweep),
    HelixScanner(HelixScanner),
    InterconnectingWaves(InterconnectingWaves),
    CylindricalAnalysis(CylindricalAnalysis),
    VoxelMatrixMorph(VoxelMatrixMorph),
    PhasedArrayEmitter(PhasedArrayEmitter),
    CrystallineCubeRefraction(CubeRefraction),
}

impl Scene {
    /// Generates the point set for `mode`. The eye has no particles.
    pub fn build(mode: Mode, size: f32, cfg: &EngineConfig) -> Option<Scene> {
        let view = Viewport::new(size);
        let scene = match mode {
            Mode::Eye => return None,
            Mode::SphereScan => Scene::SphereScan(SphereScan::new(view, &cfg.sphere)),
            Mode::CrystallineRefraction => {
                Scene::CrystallineRefraction(CrystallineRefraction::new(view, &cfg.crystalline))
            }
            Mode::SonarSweep => Scene::SonarSweep(SonarSweep::new(view, &cfg.sonar)),
            Mode::HelixScanner => Scene::HelixScanner(HelixScanner::new(view, &cfg.helix)),
            Mode::InterconnectingWaves => {
                Scene::InterconnectingWaves(InterconnectingWaves::new(view, &cfg.waves))
            }
            Mode::CylindricalAnalysis => {
                Scene::CylindricalAnalysis(CylindricalAnalysis::new(view, &cfg.cylinder))
            }
            Mode::VoxelMatrixMorph => {
                Scene::VoxelMatrixMorph(VoxelMatrixMorph::new(view, &cfg.voxel))
            }
            Mode::PhasedArrayEmitter => {
                Scene::PhasedArrayEmitter(PhasedArrayEmitter::new(view, &cfg.phased_array))
            }
            Mode::CrystallineCubeRefraction => {
                Scene::CrystallineCubeRefraction(CubeRefraction::new(view, &cfg.cube))
            }
        };
        Some(scene)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Scene::SphereScan(_) => Mode::SphereScan,
            Scene::CrystallineRefraction(_) => Mode::CrystallineRefraction,
            Scene::SonarSweep(_) => Mode::SonarSweep,
            Scene::HelixScanner(_) => Mode::HelixScanner,
            Scene::InterconnectingWaves(_) => Mode::InterconnectingWaves,
            Scene::CylindricalAnalysis(_) => Mode::CylindricalAnalysis,
            Scene::VoxelMatrixMorph(_) => Mode::VoxelMatrixMorph,
            Scene::PhasedArrayEmitter(_) => Mode::PhasedArrayEmitter,
            Scene::CrystallineCubeRefraction(_) => Mode::CrystallineCubeRefraction,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        match self {
            Scene::SphereScan(s) => s.particles(),
            Scene::CrystallineRefraction(s) => s.particles(),
            Scene::SonarSweep(s) => s.particles(),
            Scene::HelixScanner(s) => s.particles(),
            Scene::InterconnectingWaves(s) => s.particles(),
            Scene::CylindricalAnalysis(s) => s.particles(),
            Scene::VoxelMatrixMorph(s) => s.particles(),
            Scene::PhasedArrayEmitter(s) => s.particles(),
            Scene::CrystallineCubeRefraction(s) => s.particles(),
        }
    }

    /// The scene's own time accumulator.
    pub fn time(&self) -> f64 {
        match self {
            Scene::SphereScan(s) => s.time(),
            Scene::CrystallineRefraction(s) => s.time(),
            Scene::SonarSweep(s) => s.time(),
            Scene::HelixScanner(s) => s.time(),
            Scene::InterconnectingWaves(s) => s.time(),
            Scene::CylindricalAnalysis(s) => s.time(),
            Scene::VoxelMatrixMorph(s) => s.time(),
            Scene::PhasedArrayEmitter(s) => s.time(),
            Scene::CrystallineCubeRefraction(s) => s.time(),
        }
    }

    pub fn advance(&mut self, clock: &Clock) {
        match self {
            Scene::SphereScan(s) => s.advance(clock),
            Scene::CrystallineRefraction(s) => s.advance(clock),
            Scene::SonarSweep(s) => s.advance(clock),
            Scene::HelixScanner(s) => s.advance(clock),
            Scene::InterconnectingWaves(s) => s.advance(clock),
            Scene::CylindricalAnalysis(s) => s.advance(clock),
            Scene::VoxelMatrixMorph(s) => s.advance(clock),
            Scene::PhasedArrayEmitter(s) => s.advance(clock),
            Scene::CrystallineCubeRefraction(s) => s.advance(clock),
        }
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        match self {
            Scene::SphereScan(s) => s.draw(surface),
            Scene::CrystallineRefraction(s) => s.draw(surface),
            Scene::SonarSweep(s) => s.draw(surface),
            Scene::HelixScanner(s) => s.draw(surface),
            Scene::InterconnectingWaves(s) => s.draw(surface),
            Scene::CylindricalAnalysis(s) => s.draw(surface),
            Scene::VoxelMatrixMorph(s) => s.draw(surface),
            Scene::PhasedArrayEmitter(s) => s.draw(surface),
            Scene::CrystallineCubeRefraction(s) => s.draw(surface),
        }
    }
}
