use crate::animator::{Animator, TickSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Advance the timeline one frame and write changed styles. Returns whether
/// another frame is needed.
fn tick(animator: &Rc<RefCell<Animator>>) -> bool {
    let mut a = animator.borrow_mut();
    let now = a.now_ms();
    let changed = a.timeline.tick(now);
    for id in changed {
        a.apply_style(id);
    }
    if a.timeline.is_idle() {
        a.running = false;
        return false;
    }
    true
}

/// Start the requestAnimationFrame loop. The tick closure is built once and
/// reused for every frame.
pub(crate) fn request_tick(animator: &Rc<RefCell<Animator>>, slot: &TickSlot) {
    if slot.borrow().is_none() {
        let animator_tick = animator.clone();
        let slot_tick = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if tick(&animator_tick) {
                schedule(&animator_tick, &slot_tick);
            }
        }) as Box<dyn FnMut()>));
    }
    schedule(animator, slot);
}

fn schedule(animator: &Rc<RefCell<Animator>>, slot: &TickSlot) {
    let requested = match (web::window(), slot.borrow().as_ref()) {
        (Some(w), Some(cb)) => w
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok(),
        _ => false,
    };
    if !requested {
        log::warn!("[frame] requestAnimationFrame failed; animations paused");
        animator.borrow_mut().running = false;
    }
}
