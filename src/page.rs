// Page behaviours besides tilt.

use crate::animator::Motion;
use crate::dom;
use motion_core::constants::*;
use motion_core::{presets, Easing, RevealQueue, ScrollTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn entrance_hero(document: &web::Document, motion: &Motion) {
    for (i, selector) in HERO_SELECTORS.iter().enumerate() {
        let Some(vars) = presets::hero_entrance(i) else {
            continue;
        };
        let Some(el) = dom::query(document, selector) else {
            continue;
        };
        if let Some(id) = motion.register(&el) {
            motion.from(id, vars);
        }
    }
}

pub fn reveal_on_scroll(
    window: &web::Window,
    document: &web::Document,
    motion: &Motion,
    selector: &str,
    trigger: ScrollTrigger,
    easing: Easing,
) {
    let hidden = presets::reveal_hidden();
    let mut queue = RevealQueue::new(trigger);
    for el in dom::query_all(document, selector) {
        if let Some(id) = motion.register(&el) {
            queue.watch(id);
            motion.set(id, &hidden);
        }
    }
    let count = queue.waiting().len();
    if count == 0 {
        return;
    }
    log::info!("[reveal] watching {} elements", count);

    let queue = Rc::new(RefCell::new(queue));
    let poll = {
        let window = window.clone();
        let motion = motion.clone();
        move || {
            let mut q = queue.borrow_mut();
            if q.is_done() {
                return;
            }
            let viewport_h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            let fired = q.poll(viewport_h, |id| {
                motion.element(id).map(|el| dom::bounding_box(&el).top)
            });
            drop(q);
            for id in fired {
                let (from, vars) = presets::reveal(easing);
                motion.from_to(id, &from, vars);
            }
        }
    };
    poll();
    let poll = Rc::new(poll);
    for event in ["scroll", "resize"] {
        let poll = poll.clone();
        dom::listen(window, event, move |_| poll());
    }
}

pub fn float_globe(document: &web::Document, motion: &Motion) {
    for el in dom::query_all(document, GLOBE_SELECTOR) {
        if let Some(id) = motion.register(&el) {
            motion.to(id, presets::globe_float());
        }
    }
}

pub fn image_hover_effects(document: &web::Document, motion: &Motion) {
    for card in dom::query_all(document, HOVER_CARD_SELECTOR) {
        let Some(img) = card.query_selector("img").ok().flatten() else {
            continue;
        };
        let (Some(card_id), Some(img_id)) = (motion.register(&card), motion.register(&img)) else {
            continue;
        };

        let m = motion.clone();
        dom::listen(&card, "mouseenter", move |_| {
            m.to(img_id, presets::hover_image_enter());
            m.to(card_id, presets::hover_card_enter());
        });
        let m = motion.clone();
        dom::listen(&card, "mouseleave", move |_| {
            m.to(img_id, presets::hover_leave());
            m.to(card_id, presets::hover_leave());
        });
    }
}

pub fn nav_smooth_scroll(document: &web::Document, focus_delay_ms: u32) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !presets::is_hash_link(&href) {
                return;
            }
            ev.prevent_default();
            if presets::in_page_anchor(&href).is_none() {
                return;
            }
            let Some(target) = dom::query(&doc, &href) else {
                return;
            };

            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);

            dom::set_timeout(focus_delay_ms, move || {
                _ = target.set_attribute("tabindex", "-1");
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    _ = el.focus();
                }
            });
        });
    }
}

pub fn keyboard_accessibility(document: &web::Document, motion: &Motion) {
    for art in dom::query_all(document, ARTIFACT_SELECTOR) {
        let m = motion.clone();
        let artifact = art.clone();
        dom::listen(&art, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            if !presets::is_activation_key(&key) {
                return;
            }
            ev.prevent_default();
            let Some(card) = artifact.query_selector(ARTIFACT_CARD_SELECTOR).ok().flatten() else {
                return;
            };
            if let Some(id) = m.register(&card) {
                let (from, vars) = presets::press_pulse();
                m.from_to(id, &from, vars);
            }
        });
    }
}

pub fn tour_button(document: &web::Document, motion: &Motion, message: String) {
    let Some(btn) = document.get_element_by_id(TOUR_BUTTON_ID) else {
        return;
    };
    let Some(id) = motion.register(&btn) else {
        return;
    };
    let m = motion.clone();
    dom::listen(&btn, "click", move |_| {
        let (from, vars) = presets::tour_pulse();
        m.from_to(id, &from, vars);
        if let Some(w) = web::window() {
            _ = w.alert_with_message(&message);
        }
    });
}
