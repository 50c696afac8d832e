// Shared visual constants used by both web and native front-ends.

/// Default avatar edge length in pixels.
pub const DEFAULT_SIZE_PX: f32 = 180.0;

/// Backdrop behind the particles, sRGB.
pub const BACKDROP_INNER: [f32; 3] = [0.102, 0.102, 0.102]; // #1a1a1a
pub const BACKDROP_OUTER: [f32; 3] = [0.039, 0.039, 0.039]; // #0a0a0a

/// Eyeball and iris colours for the eye mode.
pub const EYE_BALL_COLOR: [f32; 3] = [0.937, 0.937, 0.945]; // #efeff1
pub const EYE_IRIS_COLOR: [f32; 3] = [1.0, 0.27, 0.0]; // #ff4500
pub const EYE_PUPIL_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Iris and pupil diameters relative to the eyeball.
pub const IRIS_FRACTION: f32 = 0.4;
pub const PUPIL_FRACTION: f32 = 0.375 * IRIS_FRACTION;
