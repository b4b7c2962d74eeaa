use crate::frame;
use fnv::FnvHashMap;
use instant::Instant;
use motion_core::{AnimationPort, ElementId, Property, Timeline, Transform, TweenVars};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const ID_ATTRIBUTE: &str = "data-motion-id";

/// Tween timeline plus the DOM elements it writes to.
pub struct Animator {
    pub(crate) timeline: Timeline,
    elements: FnvHashMap<ElementId, web::HtmlElement>,
    next_id: u32,
    epoch: Instant,
    pub(crate) running: bool,
}

impl Animator {
    fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            elements: FnvHashMap::default(),
            next_id: 1,
            epoch: Instant::now(),
            running: false,
        }
    }

    #[inline]
    pub(crate) fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Write the current transform of `target` to its inline style. Elements
    /// the timeline has not rendered yet keep their authored style.
    pub(crate) fn apply_style(&self, target: ElementId) {
        let Some(el) = self.elements.get(&target) else {
            return;
        };
        let Some(t) = self.timeline.rendered(target) else {
            return;
        };
        write_style(&el.style(), &t);
    }
}

fn write_style(style: &web::CssStyleDeclaration, t: &Transform) {
    let transform = t.css_transform();
    if transform == "none" {
        _ = style.remove_property("transform");
    } else {
        _ = style.set_property("transform", &transform);
    }
    if t.opacity == 1.0 {
        _ = style.remove_property("opacity");
    } else {
        _ = style.set_property("opacity", &t.opacity.to_string());
    }
    let filter = t.css_filter();
    if filter == "none" {
        _ = style.remove_property("filter");
    } else {
        _ = style.set_property("filter", &filter);
    }
}

pub(crate) type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cheap, cloneable handle to the page's animator. Starting a tween wakes the
/// frame loop; the loop parks itself again once every tween has finished.
#[derive(Clone)]
pub struct Motion {
    inner: Rc<RefCell<Animator>>,
    tick: TickSlot,
}

impl Motion {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Animator::new())),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    /// Id for `el`, registering it on first sight. Elements keep their id in
    /// a data attribute so repeated lookups resolve to the same record.
    pub fn register(&self, el: &web::Element) -> Option<ElementId> {
        let html = el.dyn_ref::<web::HtmlElement>()?.clone();
        let mut a = self.inner.borrow_mut();
        if let Some(id) = el
            .get_attribute(ID_ATTRIBUTE)
            .and_then(|v| v.parse::<u32>().ok())
            .map(ElementId)
            .filter(|id| a.elements.contains_key(id))
        {
            return Some(id);
        }
        let id = ElementId(a.next_id);
        a.next_id += 1;
        _ = el.set_attribute(ID_ATTRIBUTE, &id.0.to_string());
        a.elements.insert(id, html);
        Some(id)
    }

    pub fn element(&self, target: ElementId) -> Option<web::HtmlElement> {
        self.inner.borrow().elements.get(&target).cloned()
    }

    pub fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms()
    }

    pub fn to(&self, target: ElementId, vars: TweenVars) {
        self.with_timeline(target, false, |tl| tl.to(target, vars));
    }

    pub fn from(&self, target: ElementId, vars: TweenVars) {
        self.with_timeline(target, true, |tl| tl.from(target, vars));
    }

    pub fn from_to(&self, target: ElementId, from: &[(Property, f32)], vars: TweenVars) {
        self.with_timeline(target, true, |tl| tl.from_to(target, from, vars));
    }

    /// Jump `target` to `values` without tweening.
    pub fn set(&self, target: ElementId, values: &[(Property, f32)]) {
        let mut a = self.inner.borrow_mut();
        a.timeline.set(target, values);
        a.apply_style(target);
    }

    /// Run `f` against the timeline and wake the loop. With `render`, the
    /// start values show before the next frame.
    fn with_timeline(&self, target: ElementId, render: bool, f: impl FnOnce(&mut Timeline)) {
        {
            let mut a = self.inner.borrow_mut();
            let now = a.now_ms();
            a.timeline.set_now(now);
            f(&mut a.timeline);
            if render {
                a.apply_style(target);
            }
        }
        self.kick();
    }

    fn kick(&self) {
        {
            let mut a = self.inner.borrow_mut();
            if a.running || a.timeline.is_idle() {
                return;
            }
            a.running = true;
        }
        frame::request_tick(&self.inner, &self.tick);
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPort for Motion {
    fn animate_to(&mut self, target: ElementId, vars: TweenVars) {
        self.to(target, vars);
    }
}
