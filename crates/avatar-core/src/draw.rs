//! Drawing primitives and the surface abstraction the scenes render into.
//!
//! Colour is fixed monochrome white; only alpha varies.

use glam::{Vec2, Vec3};

/// Raster target for one frame. Implemented by the browser canvas, the
/// native instance buffer and the recording list used in tests.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, opacity: f32);
}

pub const KIND_DOT: u32 = 0;
pub const KIND_LINE: u32 = 1;

/// A dot is a zero-length capsule; a line is a capsule of half its width.
/// The layout is uploaded as-is to the GPU instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Primitive {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
    pub kind: u32,
}

impl Primitive {
    pub fn dot(center: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            from: center.to_array(),
            to: center.to_array(),
            radius,
            opacity,
            kind: KIND_DOT,
        }
    }

    pub fn line(from: Vec2, to: Vec2, width: f32, opacity: f32) -> Self {
        Self {
            from: from.to_array(),
            to: to.to_array(),
            radius: width / 2.0,
            opacity,
            kind: KIND_LINE,
        }
    }

    pub fn is_dot(&self) -> bool {
        self.kind == KIND_DOT
    }

    pub fn center(&self) -> Vec2 {
        Vec2::from(self.from)
    }
}

/// Records every call; the last `clear` drops what came before it.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
    pub clears: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dots(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.kind == KIND_DOT)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.kind == KIND_LINE)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.primitives.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.primitives.push(Primitive::dot(center, radius, opacity));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, opacity: f32) {
        self.primitives.push(Primitive::line(from, to, width, opacity));
    }
}

/// Size and opacity after the shared clamp: size never negative, opacity in
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub size: f32,
    pub opacity: f32,
}

impl DotStyle {
    pub fn new(size: f32, opacity: f32) -> Self {
        Self {
            size: if size.is_finite() { size.max(0.0) } else { 0.0 },
            opacity: if opacity.is_finite() {
                opacity.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    /// A zero-size dot is suppressed instead of drawn.
    pub fn visible(&self) -> bool {
        self.size > 0.0
    }
}

/// Draws a dot if it survived the clamp.
#[inline]
pub fn draw_dot(surface: &mut dyn Surface, at: Vec2, style: DotStyle) {
    if style.visible() {
        surface.fill_circle(at, style.size, style.opacity);
    }
}

/// Projected point awaiting the painter's pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthPoint {
    pub screen: Vec2,
    /// Post-rotation z.
    pub depth: f32,
    pub style: DotStyle,
}

impl DepthPoint {
    pub fn new(screen: Vec2, rotated: Vec3, style: DotStyle) -> Self {
        Self {
            screen,
            depth: rotated.z,
            style,
        }
    }
}

/// Stable ascending sort by depth: a point with greater z is issued after a
/// point with smaller z.
pub fn sort_by_depth(points: &mut [DepthPoint]) {
    points.sort_by(|a, b| a.depth.total_cmp(&b.depth));
}

pub fn draw_depth_sorted(surface: &mut dyn Surface, points: &mut [DepthPoint]) {
    sort_by_depth(points);
    for p in points.iter() {
        draw_dot(surface, p.screen, p.style);
    }
}
