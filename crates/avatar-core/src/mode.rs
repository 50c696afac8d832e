//! The closed set of visualization modes and the selector the host drives.

use crate::error::{AvatarError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    SphereScan,
    Eye,
    CrystallineRefraction,
    SonarSweep,
    HelixScanner,
    InterconnectingWaves,
    CylindricalAnalysis,
    VoxelMatrixMorph,
    PhasedArrayEmitter,
    CrystallineCubeRefraction,
}

impl Mode {
    /// Selector order. Index 0 is the default mode.
    pub const ALL: [Mode; 10] = [
        Mode::SphereScan,
        Mode::Eye,
        Mode::CrystallineRefraction,
        Mode::SonarSweep,
        Mode::HelixScanner,
        Mode::InterconnectingWaves,
        Mode::CylindricalAnalysis,
        Mode::VoxelMatrixMorph,
        Mode::PhasedArrayEmitter,
        Mode::CrystallineCubeRefraction,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn slug(self) -> &'static str {
        match self {
            Mode::SphereScan => "sphere-scan",
            Mode::Eye => "eye",
            Mode::CrystallineRefraction => "crystalline-refraction",
            Mode::SonarSweep => "sonar-sweep",
            Mode::HelixScanner => "helix-scanner",
            Mode::InterconnectingWaves => "interconnecting-waves",
            Mode::CylindricalAnalysis => "cylindrical-analysis",
            Mode::VoxelMatrixMorph => "voxel-matrix-morph",
            Mode::PhasedArrayEmitter => "phased-array-emitter",
            Mode::CrystallineCubeRefraction => "crystalline-cube-refraction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::SphereScan => "3D Sphere Scan",
            Mode::Eye => "Eye Tracker",
            Mode::CrystallineRefraction => "Crystalline Refraction",
            Mode::SonarSweep => "Sonar Sweep",
            Mode::HelixScanner => "Helix Scanner",
            Mode::InterconnectingWaves => "Interconnecting Waves",
            Mode::CylindricalAnalysis => "Cylindrical Analysis",
            Mode::VoxelMatrixMorph => "Voxel Matrix Morph",
            Mode::PhasedArrayEmitter => "Phased Array Emitter",
            Mode::CrystallineCubeRefraction => "Crystalline Cube Refraction",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|m| *m == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Result<Mode> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(AvatarError::IndexOutOfRange {
                index,
                count: Self::COUNT,
            })
    }

    /// The eye is DOM/pointer driven; every other mode runs a tick loop.
    pub fn is_particle_based(self) -> bool {
        self != Mode::Eye
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Mode {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.slug() == s)
            .ok_or_else(|| AvatarError::UnknownMode(s.to_string()))
    }
}

type Subscriber = Box<dyn FnMut(Mode)>;

/// Holds the active mode and tells subscribers when it changes.
#[derive(Default)]
pub struct ModeSelector {
    index: usize,
    subscribers: Vec<Subscriber>,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            index: mode.index(),
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Mode {
        Mode::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn subscribe(&mut self, callback: impl FnMut(Mode) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Out-of-range indices are ignored. Returns true when the mode changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index >= Mode::COUNT || index == self.index {
            return false;
        }
        self.index = index;
        self.notify();
        true
    }

    pub fn set(&mut self, mode: Mode) -> bool {
        self.set_index(mode.index())
    }

    pub fn next(&mut self) -> Mode {
        self.set_index((self.index + 1) % Mode::COUNT);
        self.current()
    }

    pub fn previous(&mut self) -> Mode {
        self.set_index((self.index + Mode::COUNT - 1) % Mode::COUNT);
        self.current()
    }

    fn notify(&mut self) {
        let mode = self.current();
        log::info!("[mode] -> {}", mode);
        for cb in self.subscribers.iter_mut() {
            cb(mode);
        }
    }
}
