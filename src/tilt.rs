use crate::animator::Motion;
use crate::dom::{self, Listener};
use glam::Vec2;
use motion_core::{
    ElementId, FrameCallbacks, FrameHandle, FrameScheduler, TiltConfig, TiltEffect, TiltHandle,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Tilt arena, its frame scheduler and the animator it drives.
pub struct TiltSurface {
    effect: TiltEffect,
    scheduler: RafScheduler,
    motion: Motion,
}

pub type SharedTilt = Rc<RefCell<TiltSurface>>;

pub fn new_surface(motion: Motion) -> SharedTilt {
    Rc::new_cyclic(|weak| {
        RefCell::new(TiltSurface {
            effect: TiltEffect::new(),
            scheduler: RafScheduler {
                surface: weak.clone(),
                callbacks: FrameCallbacks::new(),
            },
            motion,
        })
    })
}

/// `requestAnimationFrame` scheduler that routes each callback back into the
/// tilt arena for its element.
struct RafScheduler {
    surface: Weak<RefCell<TiltSurface>>,
    callbacks: FrameCallbacks<Closure<dyn FnMut()>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self, target: ElementId) -> Option<FrameHandle> {
        let window = web::window()?;
        let surface = &self.surface;
        let cb = self.callbacks.get_or_insert_with(target, || {
            let surface = surface.clone();
            Closure::wrap(Box::new(move || on_frame(&surface, target)) as Box<dyn FnMut()>)
        });
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0);
        }
    }
}

fn on_frame(surface: &Weak<RefCell<TiltSurface>>, target: ElementId) {
    let Some(surface) = surface.upgrade() else {
        return;
    };
    let Ok(mut s) = surface.try_borrow_mut() else {
        log::warn!("[tilt] frame for {:?} while surface busy", target);
        return;
    };
    let TiltSurface { effect, motion, .. } = &mut *s;
    let Some(el) = motion.element(target) else {
        return;
    };
    let rect = dom::bounding_box(&el);
    effect.frame(target, rect, motion);
}

fn pointer_sample(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

/// Listeners plus arena record of one tilted element. Dropping it detaches
/// both.
pub struct TiltAttachment {
    surface: SharedTilt,
    handle: Option<TiltHandle>,
    listeners: Vec<Listener>,
}

impl TiltAttachment {
    /// Keep the effect for the lifetime of the page.
    pub fn persist(mut self) {
        for l in self.listeners.drain(..) {
            l.forget();
        }
        self.handle = None;
    }
}

impl Drop for TiltAttachment {
    fn drop(&mut self) {
        self.listeners.clear();
        let Some(handle) = self.handle.take() else {
            return;
        };
        match self.surface.try_borrow_mut() {
            Ok(mut s) => {
                let TiltSurface {
                    effect, scheduler, ..
                } = &mut *s;
                let target = handle.target();
                // cancels any pending frame before its callback is dropped
                effect.detach(handle, scheduler);
                scheduler.callbacks.remove(target);
            }
            Err(_) => log::warn!("[tilt] detach while surface busy; record kept"),
        }
    }
}

/// Attach pointer move/leave/cancel listeners to `element`. Attaching the
/// same element twice registers its listeners twice.
pub fn attach(
    surface: &SharedTilt,
    element: &web::Element,
    config: TiltConfig,
) -> Option<TiltAttachment> {
    let motion = surface.borrow().motion.clone();
    let target = motion.register(element)?;
    let handle = surface.borrow_mut().effect.attach(target, config);

    let mut listeners = Vec::with_capacity(3);
    let weak = Rc::downgrade(surface);
    listeners.extend(Listener::new(element, "pointermove", move |ev| {
        let (Some(sample), Some(surface)) = (pointer_sample(&ev), weak.upgrade()) else {
            return;
        };
        let mut s = surface.borrow_mut();
        let TiltSurface {
            effect, scheduler, ..
        } = &mut *s;
        effect.pointer_move(target, sample, scheduler);
    }));
    for event in ["pointerleave", "pointercancel"] {
        let weak = Rc::downgrade(surface);
        listeners.extend(Listener::new(element, event, move |_ev| {
            let Some(surface) = weak.upgrade() else {
                return;
            };
            let mut s = surface.borrow_mut();
            let TiltSurface {
                effect,
                scheduler,
                motion,
            } = &mut *s;
            let now = motion.now_ms();
            effect.pointer_leave(target, now, scheduler, motion);
        }));
    }

    Some(TiltAttachment {
        surface: surface.clone(),
        handle: Some(handle),
        listeners,
    })
}

/// Attach every element matching `selector` for the rest of the page's life.
/// Returns how many were attached.
pub fn attach_all(
    surface: &SharedTilt,
    document: &web::Document,
    selector: &str,
    config: TiltConfig,
) -> usize {
    let mut n = 0;
    for el in dom::query_all(document, selector) {
        if let Some(a) = attach(surface, &el, config) {
            a.persist();
            n += 1;
        }
    }
    log::info!("[tilt] {} x {} ({:?})", selector, n, config);
    n
}

/// Tilt attachment handed to JavaScript.
#[wasm_bindgen]
pub struct TiltBinding {
    inner: Option<TiltAttachment>,
}

#[wasm_bindgen]
impl TiltBinding {
    /// Whether the element was attached.
    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.inner.is_some()
    }

    pub fn detach(&mut self) {
        self.inner.take();
    }
}

#[wasm_bindgen(js_name = attachTilt)]
pub fn attach_tilt(
    element: web::Element,
    max_rotation_x: f32,
    max_rotation_y: f32,
    perspective: f32,
) -> TiltBinding {
    let config = TiltConfig::new(max_rotation_x, max_rotation_y, perspective);
    TiltBinding {
        inner: attach(&crate::tilt_surface(), &element, config),
    }
}
