use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-wide `pointermove` subscription in viewport coordinates. The
/// listener is removed when this value is dropped.
pub struct PointerListener {
    window: web::Window,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn attach(mut on_move: impl FnMut(Vec2) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            on_move(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "pointermove",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow!("pointermove listener: {:?}", e))?;
        Ok(Self { window, closure })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
