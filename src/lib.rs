#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use constants::DEFAULT_CANVAS_ID;
use crate::core::MountGeneration;

thread_local! {
    static ACTIVE: RefCell<Option<frame::Mount>> = const { RefCell::new(None) };
    // Bumped by every explicit mount/unmount; a pending mount whose ticket
    // is no longer current has been superseded and must not attach.
    static GENERATION: RefCell<MountGeneration> = RefCell::new(MountGeneration::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-text starting");

    let ticket = GENERATION.with(|g| g.borrow().current());
    spawn_local(async move {
        if let Err(e) = mount_when_fonts_ready(ticket, DEFAULT_CANVAS_ID).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Wait for web fonts, then mount unless a later mount/unmount superseded
/// `ticket` in the meantime.
async fn mount_when_fonts_ready(ticket: u64, canvas_id: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    // Missing font API or a failed load falls back to the font stack.
    if let Err(e) = dom::fonts_ready(&document).await {
        log::warn!("[fonts] not ready ({:?}); using fallback font", e);
    }
    if !GENERATION.with(|g| g.borrow().is_current(ticket)) {
        log::debug!("[mount] #{} superseded while fonts loaded", canvas_id);
        return Ok(());
    }
    replace_active(canvas_id)
}

fn replace_active(canvas_id: &str) -> anyhow::Result<()> {
    release_active();
    let m = frame::Mount::new(canvas_id)?;
    ACTIVE.with(|a| *a.borrow_mut() = Some(m));
    Ok(())
}

fn release_active() -> bool {
    let active = ACTIVE.with(|a| a.borrow_mut().take());
    match active {
        Some(mut m) => m.unmount(),
        None => false,
    }
}

/// Mount the overlay on the canvas with `canvas_id` (default
/// `particle-text`) once web fonts are ready, replacing any overlay already
/// mounted. Supersedes the automatic mount made at startup.
#[wasm_bindgen]
pub async fn mount_particle_text(canvas_id: Option<String>) -> Result<(), JsValue> {
    let ticket = GENERATION.with(|g| g.borrow_mut().bump());
    let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
    mount_when_fonts_ready(ticket, &canvas_id)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear down the mounted overlay and cancel any mount still waiting on
/// fonts. Returns `false` if nothing was mounted.
#[wasm_bindgen]
pub fn unmount_particle_text() -> bool {
    GENERATION.with(|g| g.borrow_mut().bump());
    release_active()
}
