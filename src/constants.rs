/// Browser host constants: element ids, class names and key bindings.
///
/// Pure data so the host-side tests can include this file directly.

// Element the start entry mounts into when the page provides one.
pub const AUTO_MOUNT_ID: &str = "avatar";
// Optional `data-size` attribute on the auto-mount element ("180px" or "180").
pub const SIZE_ATTRIBUTE: &str = "data-size";
// Optional `data-mode` attribute holding the initial mode slug.
pub const MODE_ATTRIBUTE: &str = "data-mode";

pub const FRAME_CLASS: &str = "avatar-frame";
pub const CANVAS_CLASS: &str = "avatar-canvas";
pub const EYE_STAGE_CLASS: &str = "eye-stage";
pub const EYE_BALL_CLASS: &str = "eye-ball";
pub const EYE_IRIS_CLASS: &str = "eye-iris";
pub const EYE_PUPIL_CLASS: &str = "eye-pupil";
pub const EYE_GLINT_CLASS: &str = "eye-glint";
pub const EYE_HIGHLIGHT_CLASS: &str = "eye-highlight";

// Global key bindings installed by the start entry.
pub const KEY_PREVIOUS_MODE: &str = "[";
pub const KEY_NEXT_MODE: &str = "]";

// Sizes below this are clamped; a zero-sized canvas cannot be drawn.
pub const MIN_SIZE_PX: f32 = 8.0;

// Iris follow easing.
pub const IRIS_TRANSITION: &str = "transform 0.05s ease-out";

// Particle colour; alpha comes from each primitive.
pub const PARTICLE_RGB: (u8, u8, u8) = (255, 255, 255);
