// Host-side tests for the desktop preview's window-free pieces.

use avatar_core::{
    DrawList, EngineConfig, IrisTransform, Mode, Surface, Visualizer, BACKDROP_INNER,
    EYE_BALL_COLOR,
};
use avatar_native::{eye_instances, particle_instances, InstanceData, Placement, RedrawScheduler};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn instance_layout_matches_the_vertex_attributes() {
    // from, to, radius, opacity, kind, color
    assert_eq!(std::mem::size_of::<InstanceData>(), 40);
}

#[test]
fn placement_centres_the_avatar() {
    let p = Placement::fit(Vec2::new(800.0, 600.0), 180.0, 0.9);
    assert!((p.scale - 3.0).abs() < 1e-5);
    assert!((p.origin - Vec2::new(130.0, 30.0)).length() < 1e-3);
    let rect = p.rect(180.0);
    assert!((rect.center() - Vec2::new(400.0, 300.0)).length() < 1e-3);
}

#[test]
fn particles_follow_the_backdrop_in_order() {
    let mut list = DrawList::new();
    list.clear(180.0, 180.0);
    list.fill_circle(Vec2::new(10.0, 10.0), 2.0, 0.5);
    list.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, 0.3);
    let mut out = Vec::new();
    particle_instances(&list, 180.0, &mut out);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].color, BACKDROP_INNER);
    assert_eq!(out[0].shape.radius, 90.0);
    assert_eq!(out[1].shape, list.primitives[0]);
    assert_eq!(out[2].shape, list.primitives[1]);
}

#[test]
fn centred_iris_is_round() {
    let mut out = Vec::new();
    eye_instances(180.0, IrisTransform::IDENTITY, 2.0, &mut out);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].color, EYE_BALL_COLOR);
    let iris = out[1].shape;
    assert_eq!(iris.from, iris.to);
    assert!((iris.radius - 36.0).abs() < 1e-4);
}

#[test]
fn iris_offset_is_converted_to_avatar_units() {
    let mut out = Vec::new();
    let iris = IrisTransform {
        offset: Vec2::new(20.0, -10.0),
        scale_y: 0.9,
    };
    eye_instances(180.0, iris, 2.0, &mut out);
    let shape = out[1].shape;
    let mid = (Vec2::from(shape.from) + Vec2::from(shape.to)) / 2.0;
    assert!((mid - Vec2::new(100.0, 85.0)).length() < 1e-4);
    // full width kept, height squashed to 90%
    let half_width = (shape.to[0] - shape.from[0]) / 2.0 + shape.radius;
    assert!((half_width - 36.0).abs() < 1e-4);
    assert!((shape.radius - 36.0 * 0.9).abs() < 1e-4);
}

#[test]
fn redraw_scheduler_drives_the_visualizer() {
    let requests = Rc::new(Cell::new(0));
    let counter = requests.clone();
    let scheduler = RedrawScheduler::new(move || counter.set(counter.get() + 1));
    let mut vis = Visualizer::new(scheduler, EngineConfig::default());
    let mut list = DrawList::new();

    vis.start(Mode::SonarSweep, 180.0);
    assert_eq!(requests.get(), 1);
    for frame in 0..5 {
        let due = vis.scheduler_mut().take_due();
        assert_eq!(due.len(), 1);
        for handle in due {
            assert!(vis.on_frame(handle, frame as f64 * 16.0, &mut list));
        }
    }
    assert_eq!(requests.get(), 6);

    vis.start(Mode::Eye, 180.0);
    assert_eq!(vis.scheduler().pending(), 0);
}
