#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use avatar_core::{Mode, DEFAULT_SIZE_PX};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod eye;
mod frame;
mod input;
mod style;
mod view;

pub use view::AvatarView;

use constants::{AUTO_MOUNT_ID, MODE_ATTRIBUTE, SIZE_ATTRIBUTE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("avatar-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mounts into `#avatar` when the page has one; otherwise the page creates
/// views itself through `AvatarView`.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let Some(host) = document.get_element_by_id(AUTO_MOUNT_ID) else {
        log::info!("[view] no #{} element; not auto-mounting", AUTO_MOUNT_ID);
        return Ok(());
    };

    let size = host
        .get_attribute(SIZE_ATTRIBUTE)
        .and_then(|raw| style::parse_size_px(&raw))
        .unwrap_or(DEFAULT_SIZE_PX);
    let mode = match host.get_attribute(MODE_ATTRIBUTE) {
        Some(slug) => slug.parse().unwrap_or_else(|e| {
            log::warn!("[view] {}; using {}", e, Mode::default());
            Mode::default()
        }),
        None => Mode::default(),
    };

    let view = Rc::new(AvatarView::mount(AUTO_MOUNT_ID, size, mode)?);
    events::wire_mode_keys(view)?;
    Ok(())
}
