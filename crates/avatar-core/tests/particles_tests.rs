// Host-side tests for the point-set generators.

use avatar_core::particles::*;
use avatar_core::{EngineConfig, Mode, ParticleField};

fn field(mode: Mode, size: f32) -> ParticleField {
    ParticleField::new(mode, size, &EngineConfig::default()).expect("particle mode")
}

#[test]
fn sphere_scan_has_250_points_on_a_72px_shell() {
    let f = field(Mode::SphereScan, 180.0);
    assert_eq!(f.particle_count(), 250);
    for p in f.particles() {
        let r = p.position.length();
        assert!((r - 72.0).abs() < 1e-3, "radius {r}");
    }
}

#[test]
fn crystalline_grid_is_15_by_15_with_even_spacing() {
    let f = field(Mode::CrystallineRefraction, 180.0);
    let dots = f.particles();
    assert_eq!(dots.len(), 225);
    let spacing = 180.0 / 14.0;
    for (i, p) in dots.iter().enumerate() {
        let (row, col) = (i / 15, i % 15);
        assert!((p.position.x - col as f32 * spacing).abs() < 1e-3);
        assert!((p.position.y - row as f32 * spacing).abs() < 1e-3);
        assert_eq!(p.position.z, 0.0);
    }
    let last = dots.last().unwrap();
    assert!((last.position.x - 180.0).abs() < 1e-3);
    assert!((last.position.y - 180.0).abs() < 1e-3);
}

#[test]
fn particle_counts_per_mode() {
    let expected = [
        (Mode::SphereScan, 250),
        (Mode::CrystallineRefraction, 225),
        (Mode::SonarSweep, 10 + 18 + 25 + 33 + 40),
        (Mode::HelixScanner, 100),
        (Mode::InterconnectingWaves, 12 + 24 + 36),
        (Mode::CylindricalAnalysis, 15 * 25),
        (Mode::VoxelMatrixMorph, 125),
        (Mode::PhasedArrayEmitter, 12 + 18 + 24 + 30),
        (Mode::CrystallineCubeRefraction, 343),
    ];
    for (mode, count) in expected {
        assert_eq!(field(mode, 180.0).particle_count(), count, "{mode}");
    }
}

#[test]
fn eye_has_no_particle_field() {
    assert!(ParticleField::new(Mode::Eye, 180.0, &EngineConfig::default()).is_none());
}

#[test]
fn generation_is_deterministic_for_a_fixed_size() {
    for mode in Mode::ALL.into_iter().filter(|m| m.is_particle_based()) {
        let a = field(mode, 180.0);
        let b = field(mode, 180.0);
        let bits = |f: &ParticleField| -> Vec<[u32; 3]> {
            f.particles()
                .iter()
                .map(|p| p.position.to_array().map(f32::to_bits))
                .collect()
        };
        assert_eq!(bits(&a), bits(&b), "{mode}");
    }
}

#[test]
fn sonar_ring_density_grows_with_radius() {
    let cfg = EngineConfig::default().sonar;
    let dots = sonar_points(&cfg);
    let mut per_ring = [0usize; 5];
    for p in &dots {
        let polar = p.polar.expect("ring particle");
        per_ring[polar.ring] += 1;
        assert!((p.position.truncate().length() - polar.radius).abs() < 1e-3);
    }
    assert_eq!(per_ring, [10, 18, 25, 33, 40]);
}

#[test]
fn sonar_without_a_ring_step_has_no_rings() {
    let mut cfg = EngineConfig::default().sonar;
    cfg.ring_step = 0.0;
    assert!(sonar_points(&cfg).is_empty());
    cfg.ring_step = -15.0;
    assert!(sonar_points(&cfg).is_empty());
}

#[test]
fn lattices_are_centered_on_the_origin() {
    let cfg = EngineConfig::default();
    for lattice in [&cfg.voxel.lattice, &cfg.cube.lattice] {
        let dots = lattice_points(lattice);
        let sum = dots
            .iter()
            .fold(glam::Vec3::ZERO, |acc, p| acc + p.position);
        assert!(sum.length() < 1e-2);
        let half = (lattice.grid_size - 1) as f32 * lattice.spacing / 2.0;
        assert_eq!(dots[0].position, glam::Vec3::splat(-half));
    }
}

#[test]
fn helix_steps_angle_and_height_linearly() {
    let cfg = EngineConfig::default().helix;
    let dots = helix_points(&cfg);
    assert_eq!(dots[0].position.y, -60.0);
    for w in dots.windows(2) {
        let (a, b) = (w[0].polar.unwrap(), w[1].polar.unwrap());
        assert!((b.angle - a.angle - 0.3).abs() < 1e-4);
        assert!((w[1].position.y - w[0].position.y - 1.2).abs() < 1e-4);
    }
}

#[test]
fn ring_offsets_follow_counts() {
    let cfg = EngineConfig::default().phased_array;
    assert_eq!(ring_offsets(&cfg.rings), vec![0, 12, 30, 54]);
}
