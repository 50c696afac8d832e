// Host-side tests for inline style helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;

#[test]
fn size_attribute_accepts_px_suffix() {
    assert_eq!(parse_size_px("180px"), Some(180.0));
    assert_eq!(parse_size_px(" 96 "), Some(96.0));
    assert_eq!(parse_size_px("64.5 px"), Some(64.5));
}

#[test]
fn size_attribute_rejects_garbage() {
    assert_eq!(parse_size_px(""), None);
    assert_eq!(parse_size_px("large"), None);
    assert_eq!(parse_size_px("-20px"), None);
    assert_eq!(parse_size_px("0"), None);
    assert_eq!(parse_size_px("NaN"), None);
}

#[test]
fn sizes_are_clamped_to_a_drawable_minimum() {
    assert_eq!(clamp_size(0.0), MIN_SIZE_PX);
    assert_eq!(clamp_size(f32::INFINITY), MIN_SIZE_PX);
    assert_eq!(clamp_size(240.0), 240.0);
}

#[test]
fn particle_colour_is_white_with_clamped_alpha() {
    assert_eq!(particle_rgba(0.5), "rgba(255, 255, 255, 0.5)");
    assert_eq!(particle_rgba(3.0), "rgba(255, 255, 255, 1)");
    assert_eq!(particle_rgba(-1.0), "rgba(255, 255, 255, 0)");
}

#[test]
fn frame_and_stage_carry_the_size() {
    let frame = frame_style(180.0);
    assert!(frame.contains("width:180px;height:180px;"));
    assert!(frame.contains("border-radius:50%"));
    assert!(eye_stage_style(96.0).contains("width:96px;height:96px;"));
}

#[test]
fn iris_starts_centred_and_pupil_is_centred_in_it() {
    let iris = eye_iris_style(0.4);
    assert!(iris.contains("width:40%;height:40%;"));
    assert!(iris.contains("translate(0px, 0px) scaleY(1)"));
    assert!(iris.contains(IRIS_TRANSITION));
    let pupil = eye_pupil_style(0.375);
    assert!(pupil.contains("width:37.5%;height:37.5%;top:31.25%;left:31.25%;"));
}

#[test]
fn eyeball_highlight_is_a_skewed_sheen_that_ignores_the_pointer() {
    let sheen = eye_highlight_style();
    assert!(sheen.contains("position:absolute;top:5%;left:10%;width:100%;height:100%;"));
    assert!(sheen.contains("pointer-events:none;"));
    assert!(sheen.contains("rgba(255, 255, 255, 0) 24%"));
    assert!(sheen.contains("skewX(-20deg)"));
    assert_ne!(EYE_HIGHLIGHT_CLASS, EYE_GLINT_CLASS);
}

#[test]
fn canvas_visibility_toggles_display() {
    assert_eq!(display(true), "block");
    assert_eq!(display(false), "none");
}
