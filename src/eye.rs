use crate::constants::{
    EYE_BALL_CLASS, EYE_GLINT_CLASS, EYE_HIGHLIGHT_CLASS, EYE_IRIS_CLASS, EYE_PUPIL_CLASS,
    EYE_STAGE_CLASS,
};
use crate::events::PointerListener;
use crate::{dom, style};
use anyhow::anyhow;
use avatar_core::{EyeConfig, PointerTracker, IRIS_FRACTION, PUPIL_FRACTION};
use web_sys as web;

/// The eye mode's DOM: stage > ball > (iris > (pupil, glint), highlight),
/// plus the global pointer listener that steers the iris. Dropping it removes
/// both.
pub struct EyeView {
    stage: web::HtmlElement,
    _listener: PointerListener,
}

impl EyeView {
    pub fn mount(parent: &web::HtmlElement, size: f32, config: EyeConfig) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let stage: web::HtmlElement =
            dom::create_styled(&document, "div", EYE_STAGE_CLASS, &style::eye_stage_style(size))?;
        let ball: web::HtmlElement =
            dom::create_styled(&document, "div", EYE_BALL_CLASS, style::eye_ball_style())?;
        let iris: web::HtmlElement = dom::create_styled(
            &document,
            "span",
            EYE_IRIS_CLASS,
            &style::eye_iris_style(IRIS_FRACTION),
        )?;
        let pupil: web::HtmlElement = dom::create_styled(
            &document,
            "span",
            EYE_PUPIL_CLASS,
            &style::eye_pupil_style(PUPIL_FRACTION / IRIS_FRACTION),
        )?;
        let glint: web::HtmlElement =
            dom::create_styled(&document, "span", EYE_GLINT_CLASS, style::eye_glint_style())?;
        let highlight: web::HtmlElement = dom::create_styled(
            &document,
            "span",
            EYE_HIGHLIGHT_CLASS,
            style::eye_highlight_style(),
        )?;
        dom::append(&iris, &pupil)?;
        dom::append(&iris, &glint)?;
        dom::append(&ball, &iris)?;
        dom::append(&ball, &highlight)?;
        dom::append(&stage, &ball)?;
        dom::append(parent, &stage)?;

        let mut tracker = PointerTracker::new(config);
        let mut warned = false;
        let listener = PointerListener::attach(move |pointer| {
            match tracker.update(dom::client_rect(&ball), pointer) {
                Some(transform) => dom::set_style_property(&iris, "transform", &transform.css()),
                None if !warned => {
                    warned = true;
                    log::warn!("[eye] eyeball has no layout yet; pointer ignored");
                }
                None => {}
            }
        });
        let listener = match listener {
            Ok(l) => l,
            Err(e) => {
                stage.remove();
                return Err(e);
            }
        };
        log::info!("[eye] mounted at {}px", size);
        Ok(Self {
            stage,
            _listener: listener,
        })
    }
}

impl Drop for EyeView {
    fn drop(&mut self) {
        self.stage.remove();
    }
}
