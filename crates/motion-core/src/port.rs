// Seams between the platform-free motion logic and its host. The web
// front-end implements them against `requestAnimationFrame` and the tween
// timeline; tests use recording doubles.

use crate::tween::TweenVars;
use fnv::FnvHashMap;

/// Identity of an element registered with the host. The core never holds DOM
/// references, only these keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Handle of a scheduled animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Injected animation engine.
pub trait AnimationPort {
    /// Animate `target` from its current values toward `vars`.
    fn animate_to(&mut self, target: ElementId, vars: TweenVars);
}

/// Host animation-frame scheduler (request/cancel).
pub trait FrameScheduler {
    /// Schedule one callback for `target` before the next repaint. `None`
    /// when the host refused the request.
    fn request_frame(&mut self, target: ElementId) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// One reusable frame callback per element. A scheduler builds the callback
/// on the first request for an element and hands the same one to every later
/// request, so cancelled frames leave nothing behind. Callbacks are dropped
/// when their element is detached.
pub struct FrameCallbacks<C> {
    slots: FnvHashMap<ElementId, C>,
}

impl<C> Default for FrameCallbacks<C> {
    fn default() -> Self {
        Self {
            slots: FnvHashMap::default(),
        }
    }
}

impl<C> FrameCallbacks<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_with(&mut self, target: ElementId, make: impl FnOnce() -> C) -> &C {
        self.slots.entry(target).or_insert_with(make)
    }

    pub fn remove(&mut self, target: ElementId) -> Option<C> {
        self.slots.remove(&target)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn callback_is_built_once_per_element() {
        let mut cbs = FrameCallbacks::new();
        let mut built = 0;
        for _ in 0..5 {
            cbs.get_or_insert_with(ElementId(1), || {
                built += 1;
                Rc::new(())
            });
        }
        cbs.get_or_insert_with(ElementId(2), || Rc::new(()));
        assert_eq!(built, 1);
        assert_eq!(cbs.len(), 2);
    }

    #[test]
    fn remove_drops_the_callback() {
        let mut cbs = FrameCallbacks::new();
        let cb = Rc::new(());
        cbs.get_or_insert_with(ElementId(1), || cb.clone());
        assert_eq!(Rc::strong_count(&cb), 2);
        assert!(cbs.remove(ElementId(1)).is_some());
        assert_eq!(Rc::strong_count(&cb), 1);
        assert!(cbs.is_empty());
        assert!(cbs.remove(ElementId(1)).is_none());
    }
}
