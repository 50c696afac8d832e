// Inline style strings for the avatar frame, the canvas and the eye DOM.
// No web-sys here: the host-side tests include this file directly.

use crate::constants::{IRIS_TRANSITION, MIN_SIZE_PX, PARTICLE_RGB};

/// Parses "180px", "180" or " 180.5px " into pixels. Non-positive or
/// unparsable input yields `None`.
pub fn parse_size_px(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let px: f32 = number.parse().ok()?;
    (px.is_finite() && px > 0.0).then_some(px)
}

pub fn clamp_size(px: f32) -> f32 {
    if px.is_finite() {
        px.max(MIN_SIZE_PX)
    } else {
        MIN_SIZE_PX
    }
}

/// Canvas fill/stroke colour for a given alpha.
pub fn particle_rgba(opacity: f32) -> String {
    let (r, g, b) = PARTICLE_RGB;
    format!("rgba({}, {}, {}, {})", r, g, b, opacity.clamp(0.0, 1.0))
}

pub fn frame_style(size: f32) -> String {
    format!(
        "position:relative;width:{s}px;height:{s}px;border-radius:50%;overflow:hidden;\
         background:radial-gradient(circle at 50% 40%, #1a1a1a, #0a0a0a 66%, #0f0f0f 100%);\
         box-shadow:inset 0 -10px 30px rgba(0, 0, 0, 0.3);",
        s = size
    )
}

pub fn canvas_style() -> &'static str {
    "position:absolute;left:0;top:0;"
}

pub fn eye_stage_style(size: f32) -> String {
    format!(
        "display:flex;justify-content:center;align-items:center;width:{s}px;height:{s}px;",
        s = size
    )
}

pub fn eye_ball_style() -> &'static str {
    "display:flex;justify-content:center;align-items:center;width:100%;height:100%;\
     border-radius:50%;position:relative;\
     background:radial-gradient(circle at 50% 40%, #fcfcfc, #efeff1 66%, #9b5050 100%);\
     box-shadow:0 0 40px rgba(155, 80, 80, 0.3), 0 0 80px rgba(155, 80, 80, 0.15), \
     inset 0 -10px 30px rgba(0, 0, 0, 0.1);"
}

pub fn eye_iris_style(iris_fraction: f32) -> String {
    let pct = iris_fraction * 100.0;
    format!(
        "display:block;width:{p}%;height:{p}%;border-radius:50%;position:relative;\
         background:radial-gradient(circle at 50% 50%, #ff4500 0%, #ff6b35 30%, #cc3700 100%);\
         transition:{t};transform:translate(0px, 0px) scaleY(1);\
         box-shadow:inset 0 0 20px rgba(0, 0, 0, 0.3), 0 0 15px rgba(255, 69, 0, 0.4);",
        p = pct,
        t = IRIS_TRANSITION
    )
}

/// Pupil as a fraction of the iris, centred inside it.
pub fn eye_pupil_style(pupil_of_iris: f32) -> String {
    let pct = pupil_of_iris * 100.0;
    let inset = (100.0 - pct) / 2.0;
    format!(
        "display:block;position:absolute;width:{p}%;height:{p}%;top:{i}%;left:{i}%;\
         border-radius:50%;background:radial-gradient(circle at 30% 30%, #1a1a1a, #000000);\
         box-shadow:0 0 10px rgba(0, 0, 0, 0.5), inset 0 0 5px rgba(255, 255, 255, 0.1);",
        p = pct,
        i = inset
    )
}

pub fn eye_glint_style() -> &'static str {
    "display:block;position:absolute;width:12%;height:12%;top:35%;left:38%;\
     border-radius:50%;background:rgba(255, 255, 255, 0.9);"
}

/// Skewed specular sheen over the upper left of the eyeball, drawn above the
/// iris and transparent to the pointer.
pub fn eye_highlight_style() -> &'static str {
    "display:block;position:absolute;top:5%;left:10%;width:100%;height:100%;\
     border-radius:50%;pointer-events:none;\
     background:radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.8), \
     rgba(255, 255, 255, 0.6) 14%, rgba(255, 255, 255, 0) 24%);\
     transform:translateX(-27%) translateY(-30%) skewX(-20deg);"
}

/// Frame without the dark backdrop; the eye brings its own.
pub fn bare_frame_style(size: f32) -> String {
    format!("position:relative;width:{s}px;height:{s}px;", s = size)
}

pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
