//! Platform-free motion logic for the page front-end.
//!
//! Nothing here touches the DOM. The web binding feeds in element ids,
//! pointer samples, bounding boxes and timestamps, and implements the
//! [`AnimationPort`] and [`FrameScheduler`] seams.

pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod port;
pub mod presets;
pub mod reveal;
pub mod tilt;
pub mod tween;

pub use config::{MotionConfig, TiltGroup};
pub use easing::{Direction, Easing};
pub use error::{MotionError, Result};
pub use port::{AnimationPort, ElementId, FrameCallbacks, FrameHandle, FrameScheduler};
pub use reveal::{RevealQueue, ScrollTrigger};
pub use tilt::{BoundingBox, PointerSample, TiltConfig, TiltEffect, TiltHandle, TiltPhase};
pub use tween::{Property, PropertyList, Repeat, Timeline, Transform, TweenVars};
