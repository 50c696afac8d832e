//! Per-instance tuning.
//!
//! Every engine instance carries its own copy, so two avatars on one page can
//! run with different speeds without touching shared state. Time rates are
//! expressed per millisecond of real time and are multiplied by
//! `global_speed` before they reach a scene.

use smallvec::{smallvec, SmallVec};
use std::f32::consts::FRAC_PI_2;

/// One ring of a concentric ring layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub radius: f32,
    pub count: usize,
}

impl RingSpec {
    pub const fn new(radius: f32, count: usize) -> Self {
        Self { radius, count }
    }
}

pub type RingTable = SmallVec<[RingSpec; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub dot_count: usize,
    pub radius_fraction: f32,
    pub time_rate: f32,
    pub tilt_frequency: f32,
    pub tilt_amplitude: f32,
    pub spin_rate: f32,
    pub scan_frequency: f32,
    pub scan_width: f32,
    /// Perspective field of view as a multiple of the sphere radius.
    pub fov_factor: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            dot_count: 250,
            radius_fraction: 0.4,
            time_rate: 0.0005,
            tilt_frequency: 0.3,
            tilt_amplitude: 0.5,
            spin_rate: 0.5,
            scan_frequency: 2.5,
            scan_width: 25.0,
            fov_factor: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrystallineConfig {
    pub grid_size: usize,
    /// Wavefront travel in pixels per millisecond.
    pub time_rate: f32,
    /// The wavefront wraps after `period_factor * size` pixels.
    pub period_factor: f32,
    pub wave_width: f32,
    pub max_displacement: f32,
}

impl Default for CrystallineConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            time_rate: 0.16,
            period_factor: 1.2,
            wave_width: 60.0,
            max_displacement: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SonarConfig {
    pub ring_min: f32,
    pub ring_max: f32,
    pub ring_step: f32,
    pub fade_ms: f32,
    /// Angular distance under which the sweep refreshes a particle.
    pub sweep_epsilon: f32,
    /// Sweep angular velocity in radians per second before `global_speed`.
    pub sweep_rate: f32,
    pub sweep_length: f32,
    pub sweep_opacity: f32,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            ring_min: 20.0,
            ring_max: 80.0,
            ring_step: 15.0,
            fade_ms: 2500.0,
            sweep_epsilon: 0.05,
            sweep_rate: FRAC_PI_2,
            sweep_length: 85.0,
            sweep_opacity: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HelixConfig {
    pub dot_count: usize,
    pub angle_step: f32,
    pub radius: f32,
    pub height: f32,
    pub time_rate: f32,
    pub loop_duration: f32,
    pub scan_width: f32,
    pub trail_fraction: f32,
    pub trail_strength: f32,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            dot_count: 100,
            angle_step: 0.3,
            radius: 35.0,
            height: 120.0,
            time_rate: 0.001,
            loop_duration: 8.0,
            scan_width: 25.0,
            trail_fraction: 0.3,
            trail_strength: 0.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WavesConfig {
    pub rings: RingTable,
    pub time_rate: f32,
    pub pulse_amplitude: f32,
    pub dot_radius: f32,
    pub line_width: f32,
}

impl Default for WavesConfig {
    fn default() -> Self {
        Self {
            rings: smallvec![
                RingSpec::new(20.0, 12),
                RingSpec::new(45.0, 24),
                RingSpec::new(70.0, 36),
            ],
            time_rate: 0.001,
            pulse_amplitude: 3.0,
            dot_radius: 1.5,
            line_width: 0.75,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CylinderConfig {
    pub layers: usize,
    pub dots_per_layer: usize,
    pub radius: f32,
    pub height: f32,
    pub time_rate: f32,
    pub scan_width: f32,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            layers: 15,
            dots_per_layer: 25,
            radius: 60.0,
            height: 100.0,
            time_rate: 0.001,
            scan_width: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LatticeConfig {
    pub grid_size: usize,
    pub spacing: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VoxelConfig {
    pub lattice: LatticeConfig,
    pub time_rate: f32,
    pub rot_x_rate: f32,
    pub rot_y_rate: f32,
    pub scan_width: f32,
    /// Extra travel of the scan plane past the lattice faces.
    pub scan_margin: f32,
    /// Outward stretch at full scan influence.
    pub morph: f32,
    pub depth_range: f32,
}

impl Default for VoxelConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeConfig {
                grid_size: 5,
                spacing: 20.0,
            },
            time_rate: 0.0005,
            rot_x_rate: 0.4,
            rot_y_rate: 0.6,
            scan_width: 30.0,
            scan_margin: 10.0,
            morph: 0.4,
            depth_range: 80.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhasedArrayConfig {
    pub rings: RingTable,
    pub time_rate: f32,
    pub fov: f32,
    pub depth_offset: f32,
    pub tilt: f32,
    pub spin_rate: f32,
    pub wave_speed: f32,
    pub period_factor: f32,
    pub wave_width: f32,
    pub wave_height: f32,
}

impl Default for PhasedArrayConfig {
    fn default() -> Self {
        Self {
            rings: smallvec![
                RingSpec::new(20.0, 12),
                RingSpec::new(40.0, 18),
                RingSpec::new(60.0, 24),
                RingSpec::new(80.0, 30),
            ],
            time_rate: 0.001,
            fov: 300.0,
            depth_offset: 100.0,
            tilt: 1.0,
            spin_rate: 0.2,
            wave_speed: 120.0,
            period_factor: 1.8,
            wave_width: 50.0,
            wave_height: 18.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CubeConfig {
    pub lattice: LatticeConfig,
    pub time_rate: f32,
    pub fov: f32,
    pub rot_x_rate: f32,
    pub rot_y_rate: f32,
    /// Wavefront travel in pixels per millisecond of elapsed time.
    pub wave_rate: f32,
    pub period_factor: f32,
    pub wave_width: f32,
    pub max_displacement: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeConfig {
                grid_size: 7,
                spacing: 15.0,
            },
            time_rate: 0.0003,
            fov: 250.0,
            rot_x_rate: 2.0,
            rot_y_rate: 3.0,
            wave_rate: 0.04,
            period_factor: 1.5,
            wave_width: 40.0,
            max_displacement: 10.0,
        }
    }
}

/// Everything a particle engine instance needs besides mode and size.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub global_speed: f32,
    pub sphere: SphereConfig,
    pub crystalline: CrystallineConfig,
    pub sonar: SonarConfig,
    pub helix: HelixConfig,
    pub waves: WavesConfig,
    pub cylinder: CylinderConfig,
    pub voxel: VoxelConfig,
    pub phased_array: PhasedArrayConfig,
    pub cube: CubeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            global_speed: 0.5,
            sphere: SphereConfig::default(),
            crystalline: CrystallineConfig::default(),
            sonar: SonarConfig::default(),
            helix: HelixConfig::default(),
            waves: WavesConfig::default(),
            cylinder: CylinderConfig::default(),
            voxel: VoxelConfig::default(),
            phased_array: PhasedArrayConfig::default(),
            cube: CubeConfig::default(),
        }
    }
}

/// Pointer tracker tunables for the eye mode.
#[derive(Clone, Debug, PartialEq)]
pub struct EyeConfig {
    /// Maximum iris travel as a fraction of the eyeball width.
    pub travel_fraction: f32,
    /// Pointer distance, in multiples of the max travel, that maps to full
    /// deflection.
    pub clamp_multiple: f32,
    /// Vertical squash applied at full deflection.
    pub squash: f32,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            travel_fraction: 0.2,
            clamp_multiple: 5.0,
            squash: 0.1,
        }
    }
}
