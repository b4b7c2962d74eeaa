//! Pointer tilt: rotate an element toward the pointer, one update per frame.
//!
//! Each tracked element owns a small record holding its latest pointer sample
//! and the handle of its pending frame callback. Pointer moves only record the
//! sample and schedule a frame when none is pending, so bursts of moves between
//! two repaints collapse into one rotation computed from the last sample.
//!
//! ```text
//! Idle --move--> FrameScheduled --frame--> Idle
//! any  --leave/cancel--> Resetting --(reset duration)--> Idle
//! ```

use crate::constants::{
    TILT_DEFAULT_MAX_X, TILT_DEFAULT_MAX_Y, TILT_DEFAULT_PERSPECTIVE, TILT_DURATION_MS, TILT_EASE,
    TILT_RESET_DURATION_MS, TILT_RESET_EASE,
};
use crate::port::{AnimationPort, ElementId, FrameHandle, FrameScheduler};
use crate::tween::{Property, TweenVars};
use fnv::FnvHashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TiltConfig {
    /// Rotation span around the X axis in degrees (full top-to-bottom swing).
    pub max_rotation_x: f32,
    /// Rotation span around the Y axis in degrees (full left-to-right swing).
    pub max_rotation_y: f32,
    /// Perspective distance in px.
    pub perspective: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation_x: TILT_DEFAULT_MAX_X,
            max_rotation_y: TILT_DEFAULT_MAX_Y,
            perspective: TILT_DEFAULT_PERSPECTIVE,
        }
    }
}

impl TiltConfig {
    pub fn new(max_rotation_x: f32, max_rotation_y: f32, perspective: f32) -> Self {
        Self {
            max_rotation_x,
            max_rotation_y,
            perspective,
        }
    }
}

/// Viewport-relative bounding box of an element, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pointer position in viewport coordinates. Only the latest one matters.
pub type PointerSample = Vec2;

/// Pointer position relative to `rect`, (0, 0) at the top-left corner and
/// (1, 1) at the bottom-right. Not clamped: samples outside the box map
/// outside \[0, 1\]. `None` for an empty box.
#[inline]
pub fn normalized_position(sample: PointerSample, rect: &BoundingBox) -> Option<Vec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    Some(Vec2::new(
        (sample.x - rect.left) / rect.width,
        (sample.y - rect.top) / rect.height,
    ))
}

/// Target rotation for a normalized pointer position: `x` is the rotation
/// around the X axis, `y` around the Y axis (sign inverted so the element
/// leans toward the pointer).
#[inline]
pub fn tilt_rotation(config: &TiltConfig, normalized: Vec2) -> Vec2 {
    Vec2::new(
        (normalized.y - 0.5) * config.max_rotation_x,
        (normalized.x - 0.5) * -config.max_rotation_y,
    )
}

pub fn tilt_vars(rotation: Vec2, perspective: f32) -> TweenVars {
    TweenVars::new(TILT_DURATION_MS, TILT_EASE)
        .with(Property::RotationX, rotation.x)
        .with(Property::RotationY, rotation.y)
        .perspective(perspective)
}

pub fn reset_vars() -> TweenVars {
    TweenVars::new(TILT_RESET_DURATION_MS, TILT_RESET_EASE)
        .with(Property::RotationX, 0.0)
        .with(Property::RotationY, 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltPhase {
    Idle,
    FrameScheduled,
    Resetting,
}

#[derive(Clone, Debug)]
struct TrackedElement {
    config: TiltConfig,
    sample: Option<PointerSample>,
    pending: Option<FrameHandle>,
    resetting_until_ms: Option<f64>,
}

/// Proof of attachment returned by [`TiltEffect::attach`]; hand it back to
/// [`TiltEffect::detach`] for teardown.
#[derive(Debug, PartialEq, Eq)]
pub struct TiltHandle {
    target: ElementId,
}

impl TiltHandle {
    pub fn target(&self) -> ElementId {
        self.target
    }
}

/// Arena of tracked elements keyed by element id.
#[derive(Default)]
pub struct TiltEffect {
    elements: FnvHashMap<ElementId, TrackedElement>,
}

impl TiltEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `target`. Attaching an element that is already tracked
    /// replaces its configuration and keeps its pending state.
    pub fn attach(&mut self, target: ElementId, config: TiltConfig) -> TiltHandle {
        match self.elements.get_mut(&target) {
            Some(el) => {
                log::debug!("[tilt] re-attach {:?}, replacing config", target);
                el.config = config;
            }
            None => {
                self.elements.insert(
                    target,
                    TrackedElement {
                        config,
                        sample: None,
                        pending: None,
                        resetting_until_ms: None,
                    },
                );
            }
        }
        TiltHandle { target }
    }

    /// Stop tracking the handle's element, cancelling its pending frame.
    /// Returns false if it was already gone.
    pub fn detach(&mut self, handle: TiltHandle, scheduler: &mut impl FrameScheduler) -> bool {
        match self.elements.remove(&handle.target) {
            Some(el) => {
                if let Some(h) = el.pending {
                    scheduler.cancel_frame(h);
                }
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, target: ElementId) -> bool {
        self.elements.contains_key(&target)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn config(&self, target: ElementId) -> Option<TiltConfig> {
        self.elements.get(&target).map(|el| el.config)
    }

    pub fn is_frame_pending(&self, target: ElementId) -> bool {
        self.elements
            .get(&target)
            .map(|el| el.pending.is_some())
            .unwrap_or(false)
    }

    pub fn phase(&self, target: ElementId, now_ms: f64) -> Option<TiltPhase> {
        let el = self.elements.get(&target)?;
        Some(if el.pending.is_some() {
            TiltPhase::FrameScheduled
        } else if el.resetting_until_ms.map(|t| now_ms < t).unwrap_or(false) {
            TiltPhase::Resetting
        } else {
            TiltPhase::Idle
        })
    }

    /// Record the latest sample and schedule a frame unless one is pending.
    /// Returns true when a new frame was scheduled.
    pub fn pointer_move(
        &mut self,
        target: ElementId,
        sample: PointerSample,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        let Some(el) = self.elements.get_mut(&target) else {
            return false;
        };
        el.sample = Some(sample);
        el.resetting_until_ms = None;
        if el.pending.is_some() {
            return false;
        }
        match scheduler.request_frame(target) {
            Some(handle) => {
                el.pending = Some(handle);
                true
            }
            None => {
                log::debug!("[tilt] frame request refused for {:?}", target);
                false
            }
        }
    }

    /// Frame callback: turn the latest sample into a rotation tween. Frames
    /// that are no longer pending (cancelled by a leave) apply nothing.
    pub fn frame(
        &mut self,
        target: ElementId,
        rect: BoundingBox,
        port: &mut impl AnimationPort,
    ) -> Option<Vec2> {
        let el = self.elements.get_mut(&target)?;
        el.pending.take()?;
        let sample = el.sample?;
        let normalized = normalized_position(sample, &rect)?;
        let rotation = tilt_rotation(&el.config, normalized);
        port.animate_to(target, tilt_vars(rotation, el.config.perspective));
        Some(rotation)
    }

    /// Pointer leave or cancel: drop any pending frame and spring back to rest.
    pub fn pointer_leave(
        &mut self,
        target: ElementId,
        now_ms: f64,
        scheduler: &mut impl FrameScheduler,
        port: &mut impl AnimationPort,
    ) {
        let Some(el) = self.elements.get_mut(&target) else {
            return;
        };
        if let Some(h) = el.pending.take() {
            scheduler.cancel_frame(h);
        }
        el.resetting_until_ms = Some(now_ms + TILT_RESET_DURATION_MS);
        port.animate_to(target, reset_vars());
    }
}
