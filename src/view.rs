use crate::canvas::CanvasSurface;
use crate::constants::FRAME_CLASS;
use crate::eye::EyeView;
use crate::frame::RafScheduler;
use crate::{dom, style};
use anyhow::anyhow;
use avatar_core::{
    AvatarError, EngineConfig, EyeConfig, LoopHandle, LoopState, Mode, ModeSelector, Visualizer,
    DEFAULT_SIZE_PX,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Everything one mounted avatar owns. Frames from the scheduler land in
/// [`ViewState::frame`].
pub struct ViewState {
    visualizer: Visualizer<RafScheduler>,
    frame: web::HtmlElement,
    canvas: CanvasSurface,
    eye: Option<EyeView>,
    eye_config: EyeConfig,
    size: f32,
}

impl ViewState {
    pub fn frame(&mut self, handle: LoopHandle, timestamp_ms: f64) {
        let Self {
            visualizer, canvas, ..
        } = self;
        visualizer.on_frame(handle, timestamp_ms, canvas);
    }

    fn render(&mut self, mode: Mode) {
        if self.visualizer.state() == LoopState::TornDown {
            return;
        }
        let previous = self.visualizer.handle();
        let handle = self.visualizer.render(mode, self.size);
        if previous == Some(handle) {
            return;
        }
        self.eye = None;
        self.canvas.resize(self.size);
        if mode.is_particle_based() {
            _ = self
                .frame
                .set_attribute("style", &style::frame_style(self.size));
            self.canvas.set_visible(true);
            return;
        }
        _ = self
            .frame
            .set_attribute("style", &style::bare_frame_style(self.size));
        self.canvas.set_visible(false);
        match EyeView::mount(&self.frame, self.size, self.eye_config.clone()) {
            Ok(eye) => self.eye = Some(eye),
            Err(e) => log::error!("[eye] mount failed: {:?}", e),
        }
    }

    fn teardown(&mut self) {
        if self.visualizer.state() == LoopState::TornDown {
            return;
        }
        self.visualizer.stop();
        self.eye = None;
        self.frame.remove();
    }
}

/// A mounted avatar. Mode changes, from JS or the bound keys, go through the
/// selector, which re-renders the view.
#[wasm_bindgen]
pub struct AvatarView {
    selector: RefCell<ModeSelector>,
    state: Rc<RefCell<ViewState>>,
}

impl AvatarView {
    pub fn mount(container_id: &str, size: f32, mode: Mode) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let container = dom::element_by_id(&document, container_id)?;
        let size = style::clamp_size(size);

        let frame: web::HtmlElement =
            dom::create_styled(&document, "div", FRAME_CLASS, &style::frame_style(size))?;
        let canvas = CanvasSurface::create(&document, size)?;
        dom::append(&frame, canvas.element())?;
        dom::append(&container, &frame)?;

        let state = Rc::new_cyclic(|weak| {
            RefCell::new(ViewState {
                visualizer: Visualizer::new(
                    RafScheduler::new(weak.clone()),
                    EngineConfig::default(),
                ),
                frame,
                canvas,
                eye: None,
                eye_config: EyeConfig::default(),
                size,
            })
        });

        let mut selector = ModeSelector::with_mode(mode);
        let weak = Rc::downgrade(&state);
        selector.subscribe(move |mode| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().render(mode);
            }
        });
        state.borrow_mut().render(mode);
        log::info!("[view] mounted in #{} at {}px ({})", container_id, size, mode);

        Ok(Self {
            selector: RefCell::new(selector),
            state,
        })
    }
}

#[wasm_bindgen]
impl AvatarView {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, size: Option<f32>) -> Result<AvatarView, JsValue> {
        Self::mount(
            container_id,
            size.unwrap_or(DEFAULT_SIZE_PX),
            Mode::default(),
        )
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// Switches to the mode with the given slug.
    pub fn set_mode(&self, slug: &str) -> Result<(), JsValue> {
        let mode: Mode = slug
            .parse()
            .map_err(|e: AvatarError| JsValue::from_str(&e.to_string()))?;
        self.selector.borrow_mut().set(mode);
        Ok(())
    }

    pub fn next_mode(&self) -> String {
        self.selector.borrow_mut().next().slug().to_string()
    }

    pub fn previous_mode(&self) -> String {
        self.selector.borrow_mut().previous().slug().to_string()
    }

    pub fn mode(&self) -> String {
        self.selector.borrow().current().slug().to_string()
    }

    pub fn label(&self) -> String {
        self.selector.borrow().current().label().to_string()
    }

    pub fn set_size(&self, px: f32) {
        let mode = self.selector.borrow().current();
        let mut state = self.state.borrow_mut();
        state.size = style::clamp_size(px);
        state.render(mode);
    }

    /// Stops the tick loop and removes the avatar's DOM. Further calls are
    /// no-ops.
    pub fn destroy(&self) {
        self.state.borrow_mut().teardown();
    }
}

impl Drop for AvatarView {
    fn drop(&mut self) {
        self.destroy();
    }
}
