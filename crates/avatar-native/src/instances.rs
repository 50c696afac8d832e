use avatar_core::{
    DrawList, ElementRect, IrisTransform, Primitive, BACKDROP_INNER, EYE_BALL_COLOR,
    EYE_IRIS_COLOR, EYE_PUPIL_COLOR, IRIS_FRACTION, PUPIL_FRACTION,
};
use glam::Vec2;

const PARTICLE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// One capsule as the vertex shader reads it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub shape: Primitive,
    pub color: [f32; 3],
}

impl InstanceData {
    pub fn new(shape: Primitive, color: [f32; 3]) -> Self {
        Self { shape, color }
    }
}

/// Where the avatar square sits inside the window, in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub origin: Vec2,
    pub scale: f32,
}

impl Placement {
    /// Centres a `size`-pixel avatar in the window, filling `fill` of the
    /// shorter side.
    pub fn fit(window: Vec2, size: f32, fill: f32) -> Self {
        let side = window.min_element().max(1.0) * fill;
        let scale = if size > 0.0 { side / size } else { 1.0 };
        Self {
            origin: (window - Vec2::splat(size * scale)) / 2.0,
            scale,
        }
    }

    /// The avatar square in window pixels, the space cursor events use.
    pub fn rect(&self, size: f32) -> ElementRect {
        let side = size * self.scale;
        ElementRect::new(self.origin.x, self.origin.y, side, side)
    }
}

/// Round backdrop followed by the recorded particles, in draw order.
pub fn particle_instances(list: &DrawList, size: f32, out: &mut Vec<InstanceData>) {
    out.clear();
    let center = Vec2::splat(size / 2.0);
    out.push(InstanceData::new(
        Primitive::dot(center, size / 2.0, 1.0),
        BACKDROP_INNER,
    ));
    out.extend(
        list.primitives
            .iter()
            .map(|p| InstanceData::new(*p, PARTICLE_COLOR)),
    );
}

/// Eyeball, iris and pupil. `iris` is in window pixels and is converted to
/// avatar units with the placement scale.
pub fn eye_instances(size: f32, iris: IrisTransform, scale: f32, out: &mut Vec<InstanceData>) {
    out.clear();
    let center = Vec2::splat(size / 2.0);
    let offset = if scale > 0.0 {
        iris.offset / scale
    } else {
        Vec2::ZERO
    };
    out.push(InstanceData::new(
        Primitive::dot(center, size / 2.0, 1.0),
        EYE_BALL_COLOR,
    ));
    // Squash is shown by pulling the capsule ends together vertically.
    let iris_radius = size * IRIS_FRACTION / 2.0;
    let pupil_radius = size * PUPIL_FRACTION / 2.0;
    let stretch = (1.0 - iris.scale_y).max(0.0) * iris_radius;
    let at = center + offset;
    out.push(InstanceData::new(
        Primitive::line(
            at - Vec2::new(stretch, 0.0),
            at + Vec2::new(stretch, 0.0),
            2.0 * (iris_radius - stretch),
            1.0,
        ),
        EYE_IRIS_COLOR,
    ));
    out.push(InstanceData::new(
        Primitive::dot(at, pupil_radius * iris.scale_y, 1.0),
        EYE_PUPIL_COLOR,
    ));
}
