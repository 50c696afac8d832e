//! Pointer-following iris for the eye mode.
//!
//! Pure geometry: the host supplies the eyeball's layout box and the latest
//! pointer position (same coordinate space) and applies the returned
//! transform to the iris element.

use crate::config::EyeConfig;
use glam::Vec2;

/// Axis-aligned layout box of the tracked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// False until the element has been laid out.
    pub fn has_layout(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Translation plus vertical squash applied to the iris.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IrisTransform {
    pub offset: Vec2,
    pub scale_y: f32,
}

impl IrisTransform {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale_y: 1.0,
    };

    /// CSS `transform` value.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scaleY({})",
            self.offset.x, self.offset.y, self.scale_y
        )
    }
}

impl Default for IrisTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerState {
    Centered,
    Tracking { pointer: Vec2 },
}

pub struct PointerTracker {
    config: EyeConfig,
    state: TrackerState,
    transform: IrisTransform,
}

impl PointerTracker {
    pub fn new(config: EyeConfig) -> Self {
        Self {
            config,
            state: TrackerState::Centered,
            transform: IrisTransform::IDENTITY,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn transform(&self) -> IrisTransform {
        self.transform
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::Centered;
        self.transform = IrisTransform::IDENTITY;
    }

    /// Consumes one pointer sample. Returns `None` and keeps the previous
    /// state when the element has no layout yet.
    pub fn update(&mut self, element: ElementRect, pointer: Vec2) -> Option<IrisTransform> {
        let transform = iris_transform(&self.config, element, pointer)?;
        self.state = TrackerState::Tracking { pointer };
        self.transform = transform;
        Some(transform)
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(EyeConfig::default())
    }
}

/// Offset toward the pointer, proportional to its distance up to
/// `clamp_multiple` × the maximum travel, then saturated.
pub fn iris_transform(
    config: &EyeConfig,
    element: ElementRect,
    pointer: Vec2,
) -> Option<IrisTransform> {
    if !element.has_layout() || !pointer.is_finite() {
        return None;
    }
    let max_travel = element.width * config.travel_fraction;
    let reach = max_travel * config.clamp_multiple;
    if reach <= 0.0 {
        return Some(IrisTransform::IDENTITY);
    }
    let delta = pointer - element.center();
    let distance = delta.length();
    let ratio = distance.min(reach) / reach;
    Some(IrisTransform {
        offset: delta.normalize_or_zero() * max_travel * ratio,
        scale_y: 1.0 - ratio * config.squash,
    })
}
