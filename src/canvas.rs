use crate::constants::CANVAS_CLASS;
use crate::{dom, style};
use avatar_core::Surface;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D target for the particle scenes. Without a 2D context every
/// draw call is a no-op.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn create(document: &web::Document, size: f32) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement =
            dom::create_styled(document, "canvas", CANVAS_CLASS, style::canvas_style())?;
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok(),
            _ => None,
        };
        if ctx.is_none() {
            log::warn!("[canvas] 2d context unavailable; particles will not be drawn");
        }
        let mut surface = Self { canvas, ctx };
        surface.resize(size);
        Ok(surface)
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Resetting the backing size also clears the bitmap.
    pub fn resize(&mut self, size: f32) {
        let px = size.round().max(1.0) as u32;
        self.canvas.set_width(px);
        self.canvas.set_height(px);
    }

    pub fn set_visible(&self, visible: bool) {
        dom::set_style_property(&self.canvas, "display", style::display(visible));
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        if let Some(ctx) = &self.ctx {
            ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        let Some(ctx) = &self.ctx else { return };
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.set_fill_style_str(&style::particle_rgba(opacity));
        ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, opacity: f32) {
        let Some(ctx) = &self.ctx else { return };
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&style::particle_rgba(opacity));
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }
}
