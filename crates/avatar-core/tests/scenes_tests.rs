// Host-side tests for the per-frame transform pipeline.

use avatar_core::math::*;
use avatar_core::scenes::{sonar_brightness, Scene};
use avatar_core::{DrawList, EngineConfig, Mode, ParticleField};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn field(mode: Mode) -> ParticleField {
    ParticleField::new(mode, 180.0, &EngineConfig::default()).expect("particle mode")
}

fn run(f: &mut ParticleField, frames: usize, mut each: impl FnMut(&ParticleField, &DrawList)) {
    let mut list = DrawList::new();
    for i in 0..frames {
        f.tick(1000.0 + i as f64 * FRAME_MS, &mut list);
        each(f, &list);
    }
}

#[test]
fn first_tick_starts_time_at_zero() {
    for mode in Mode::ALL.into_iter().filter(|m| m.is_particle_based()) {
        let mut f = field(mode);
        let mut list = DrawList::new();
        f.tick(52_000.0, &mut list);
        assert_eq!(f.time(), 0.0, "{mode}");
        assert_eq!(f.elapsed_ms(), 0.0);
        f.tick(52_000.0 + FRAME_MS, &mut list);
        assert!(f.time() > 0.0, "{mode}");
    }
}

#[test]
fn scan_influence_is_one_at_the_peak_and_zero_outside() {
    for width in [15.0, 25.0, 30.0] {
        assert_eq!(scan_influence(0.0, width), 1.0);
        assert_eq!(eased_scan_influence(0.0, width), 1.0);
        assert_eq!(scan_influence(width, width), 0.0);
        assert_eq!(scan_influence(-width - 0.5, width), 0.0);
        assert_eq!(eased_scan_influence(width + 3.0, width), 0.0);
        let mid = scan_influence(width / 2.0, width);
        assert!(mid > 0.0 && mid < 1.0);
    }
}

#[test]
fn wavefront_displacement_peaks_on_the_front() {
    let mut f = field(Mode::CrystallineRefraction);
    run(&mut f, 30, |_, _| {});
    let Scene::CrystallineRefraction(s) = f.scene() else {
        panic!("wrong scene");
    };
    let front = s.wave_radius();
    assert_eq!(s.displacement(front), 10.0);
    assert_eq!(s.displacement(front + 30.0), 0.0);
    assert_eq!(s.displacement(front - 31.0), 0.0);
}

#[test]
fn dot_size_and_opacity_stay_in_range() {
    for mode in Mode::ALL.into_iter().filter(|m| m.is_particle_based()) {
        let mut f = field(mode);
        run(&mut f, 600, |_, list| {
            for p in &list.primitives {
                assert!(p.radius >= 0.0 && p.radius <= 7.0, "{mode} radius {}", p.radius);
                assert!(p.opacity >= 0.0 && p.opacity <= 1.0, "{mode} opacity {}", p.opacity);
                assert!(p.from[0].is_finite() && p.from[1].is_finite());
            }
        });
    }
}

#[test]
fn volumetric_modes_draw_back_to_front() {
    for mode in [Mode::PhasedArrayEmitter, Mode::CrystallineCubeRefraction] {
        let mut f = field(mode);
        run(&mut f, 120, |f, list| {
            let points = match f.scene() {
                Scene::PhasedArrayEmitter(s) => s.last_frame(),
                Scene::CrystallineCubeRefraction(s) => s.last_frame(),
                _ => unreachable!(),
            };
            assert!(points.windows(2).all(|w| w[0].depth <= w[1].depth));
            let drawn: Vec<_> = list.dots().map(|p| p.center()).collect();
            let issued: Vec<_> = points.iter().map(|p| p.screen).collect();
            assert_eq!(drawn, issued, "{mode}");
        });
    }
}

#[test]
fn interconnecting_waves_draw_links_before_dots() {
    let mut f = field(Mode::InterconnectingWaves);
    run(&mut f, 5, |f, list| {
        let Scene::InterconnectingWaves(s) = f.scene() else {
            unreachable!()
        };
        assert_eq!(s.link_count(), 24 + 48);
        let first_dot = list.primitives.iter().position(|p| p.is_dot());
        let last_line = list.primitives.iter().rposition(|p| !p.is_dot());
        assert!(matches!((first_dot, last_line), (Some(d), Some(l)) if l < d));
        assert_eq!(list.lines().count(), 72);
    });
}

#[test]
fn sonar_brightness_never_increases_while_fading() {
    let mut prev = sonar_brightness(0.0, 2500.0);
    assert_eq!(prev, 1.0);
    for step in 1..=300 {
        let b = sonar_brightness(step as f32 * 10.0, 2500.0);
        assert!(b <= prev);
        prev = b;
    }
    assert_eq!(sonar_brightness(2500.0, 2500.0), 0.0);
    assert_eq!(sonar_brightness(9000.0, 2500.0), 0.0);
}

#[test]
fn sonar_dots_stay_dark_until_swept_then_fade() {
    let mut f = field(Mode::SonarSweep);
    let opposite = f
        .particles()
        .iter()
        .position(|p| p.polar.is_some_and(|q| (q.angle - std::f32::consts::PI).abs() < 0.2))
        .expect("dot opposite the start of the sweep");

    let mut prev = f32::INFINITY;
    // ~3 s: the sweep needs 8 s for one turn at the default speed.
    run(&mut f, 180, |f, list| {
        let Scene::SonarSweep(s) = f.scene() else {
            unreachable!()
        };
        // index 0 sits at angle 0 and is swept on the first frame
        let b = s.brightness(0);
        assert!(b <= prev);
        prev = b;
        assert_eq!(s.brightness(opposite), 0.0);
        assert!(list.lines().count() == 1);
    });
    assert_eq!(prev, 0.0);
}

#[test]
fn helix_trail_only_lights_behind_the_scan() {
    assert_eq!(trail_influence(-1.0, 36.0, 0.4), 0.0);
    assert_eq!(trail_influence(36.0, 36.0, 0.4), 0.0);
    assert!((trail_influence(1e-6, 36.0, 0.4) - 0.4).abs() < 1e-4);
}

#[test]
fn rotation_preserves_length_and_order_matters() {
    let p = glam::Vec3::new(10.0, -4.0, 7.0);
    let q = rotate_yx(p, 0.7, 1.3);
    assert!((q.length() - p.length()).abs() < 1e-4);
    let swapped = rotate_y(rotate_x(p, 1.3), 0.7);
    assert!((q - swapped).length() > 1e-2);
}

#[test]
fn angular_distance_wraps() {
    assert!(angular_distance(0.01, std::f32::consts::TAU - 0.01) < 0.021);
    assert!((angular_distance(0.0, std::f32::consts::PI) - std::f32::consts::PI).abs() < 1e-5);
}

#[test]
fn clocks_keep_advancing_after_ten_days() {
    const TEN_DAYS_MS: f64 = 864_000_000.0;
    for mode in Mode::ALL.into_iter().filter(|m| m.is_particle_based()) {
        let mut f = field(mode);
        let mut list = DrawList::new();
        f.tick(0.0, &mut list);
        f.tick(TEN_DAYS_MS, &mut list);
        for i in 1..=600 {
            let before = f.time();
            f.tick(TEN_DAYS_MS + i as f64 * FRAME_MS, &mut list);
            assert!(f.time() > before, "{mode} stalled at frame {i}");
        }
    }
}

#[test]
fn wall_clock_waves_stay_smooth_after_ten_days() {
    const TEN_DAYS_MS: f64 = 864_000_000.0;
    let mut sonar = field(Mode::SonarSweep);
    let mut cube = field(Mode::CrystallineCubeRefraction);
    let mut list = DrawList::new();
    for f in [&mut sonar, &mut cube] {
        f.tick(0.0, &mut list);
        f.tick(TEN_DAYS_MS, &mut list);
    }
    let angle = |f: &ParticleField| match f.scene() {
        Scene::SonarSweep(s) => s.sweep_angle(),
        _ => panic!("wrong scene"),
    };
    let radius = |f: &ParticleField| match f.scene() {
        Scene::CrystallineCubeRefraction(s) => s.wave_radius(),
        _ => panic!("wrong scene"),
    };
    for i in 1..=60 {
        let (a, r) = (angle(&sonar), radius(&cube));
        sonar.tick(TEN_DAYS_MS + i as f64 * FRAME_MS, &mut list);
        cube.tick(TEN_DAYS_MS + i as f64 * FRAME_MS, &mut list);
        assert_ne!(angle(&sonar), a, "sweep frozen at frame {i}");
        assert_ne!(radius(&cube), r, "wavefront frozen at frame {i}");
    }
}

#[test]
fn turn_reduces_large_times_into_one_revolution() {
    let a = turn(1.0e12, 0.5);
    assert!((0.0..std::f32::consts::TAU).contains(&a));
    assert_eq!(turn(0.0, 3.0), 0.0);
    assert_eq!(wrap(1_000_000_250.0, 100.0), 50.0);
    assert_eq!(wrap(5.0, 0.0), 0.0);
}
