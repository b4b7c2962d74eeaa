#![cfg(target_arch = "wasm32")]
use crate::animator::Motion;
use crate::tilt::SharedTilt;
use motion_core::constants::REDUCED_MOTION_CLASS;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animator;
mod dom;
mod frame;
mod page;
mod tilt;

pub use tilt::{attach_tilt, TiltBinding};

thread_local! {
    static MOTION: Motion = Motion::new();
    static TILT: SharedTilt = MOTION.with(|m| tilt::new_surface(m.clone()));
}

pub(crate) fn motion() -> Motion {
    MOTION.with(Motion::clone)
}

pub(crate) fn tilt_surface() -> SharedTilt {
    TILT.with(Rc::clone)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-motion starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::ready(&document).await?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let config = dom::load_config(&document);
    dom::set_year(&document);

    let motion = motion();
    if dom::prefers_reduced_motion(&window) {
        log::info!("reduced motion requested; skipping entrance animations");
        if let Some(body) = document.body() {
            _ = body.class_list().add_1(REDUCED_MOTION_CLASS);
        }
    } else {
        page::entrance_hero(&document, &motion);
        match config.reveal_trigger() {
            Ok(trigger) => page::reveal_on_scroll(
                &window,
                &document,
                &motion,
                &config.reveal_selector,
                trigger,
                config.reveal_easing(),
            ),
            Err(e) => log::warn!("[reveal] {}", e),
        }
        page::float_globe(&document, &motion);
    }

    let surface = tilt_surface();
    for group in &config.tilt_groups {
        tilt::attach_all(&surface, &document, &group.selector, group.tilt);
    }
    page::image_hover_effects(&document, &motion);
    page::nav_smooth_scroll(&document, config.focus_delay_ms);
    page::keyboard_accessibility(&document, &motion);
    page::tour_button(&document, &motion, config.tour_message.clone());

    Ok(())
}
