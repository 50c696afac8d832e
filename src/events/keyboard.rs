use crate::input::{self, KeyAction};
use crate::view::AvatarView;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Binds the mode keys to `view` for the lifetime of the page.
pub fn wire_mode_keys(view: Rc<AvatarView>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let typing = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|el| input::is_text_entry(&el.tag_name()));
        if typing {
            return;
        }
        let Some(action) = input::key_action(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let slug = match action {
            KeyAction::PreviousMode => view.previous_mode(),
            KeyAction::NextMode => view.next_mode(),
        };
        log::info!("[keys] {:?} -> {}", action, slug);
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("keydown listener: {:?}", e))?;
    closure.forget();
    Ok(())
}
