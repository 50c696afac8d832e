use crate::view::ViewState;
use avatar_core::{FrameScheduler, LoopHandle};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One outstanding `requestAnimationFrame`. The callback lives as long as
/// the request does.
pub struct FrameRequest {
    id: Option<i32>,
    _callback: Closure<dyn FnMut(f64)>,
}

/// Drives the tick loop from `requestAnimationFrame`. Each frame is
/// delivered back to the view together with the handle it was requested for.
pub struct RafScheduler {
    view: Weak<RefCell<ViewState>>,
}

impl RafScheduler {
    pub fn new(view: Weak<RefCell<ViewState>>) -> Self {
        Self { view }
    }
}

impl FrameScheduler for RafScheduler {
    type Token = FrameRequest;

    fn schedule(&mut self, handle: LoopHandle) -> FrameRequest {
        let view = self.view.clone();
        let callback: Closure<dyn FnMut(f64)> = Closure::once(move |timestamp: f64| {
            if let Some(view) = view.upgrade() {
                view.borrow_mut().frame(handle, timestamp);
            }
        });
        let id = web::window()
            .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
        if id.is_none() {
            log::warn!("[frame] requestAnimationFrame unavailable");
        }
        FrameRequest {
            id,
            _callback: callback,
        }
    }

    fn cancel(&mut self, request: FrameRequest) {
        if let (Some(id), Some(window)) = (request.id, web::window()) {
            _ = window.cancel_animation_frame(id);
        }
    }
}
