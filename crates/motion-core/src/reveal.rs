// Scroll-triggered reveals.
// A trigger line sits at a fraction of the viewport height ("top 85%" means
// the element's top edge reaching 85% of the way down the viewport). Each
// watched element fires once.

use crate::error::{MotionError, Result};
use crate::port::ElementId;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    start_fraction: f32,
}

impl ScrollTrigger {
    pub fn new(start_fraction: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&start_fraction) {
            return Err(MotionError::InvalidConfig(format!(
                "reveal start line {} outside 0..=1",
                start_fraction
            )));
        }
        Ok(Self { start_fraction })
    }

    pub fn start_fraction(&self) -> f32 {
        self.start_fraction
    }

    /// True once the element's top edge is at or above the trigger line.
    #[inline]
    pub fn is_crossed(&self, element_top: f32, viewport_height: f32) -> bool {
        element_top <= viewport_height * self.start_fraction
    }
}

impl FromStr for ScrollTrigger {
    type Err = MotionError;

    /// Accepts `"top <position>"` where position is a percentage or one of
    /// `top`, `center`, `bottom`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MotionError::InvalidConfig(format!("unsupported reveal start `{}`", s));
        let mut words = s.split_whitespace();
        if words.next() != Some("top") {
            return Err(invalid());
        }
        let position = words.next().ok_or_else(invalid)?;
        if words.next().is_some() {
            return Err(invalid());
        }
        let fraction = match position {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            p => {
                let pct: f32 = p
                    .strip_suffix('%')
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(invalid)?;
                pct / 100.0
            }
        };
        ScrollTrigger::new(fraction)
    }
}

/// Elements waiting for their reveal.
#[derive(Debug)]
pub struct RevealQueue {
    trigger: ScrollTrigger,
    waiting: Vec<ElementId>,
}

impl RevealQueue {
    pub fn new(trigger: ScrollTrigger) -> Self {
        Self {
            trigger,
            waiting: Vec::new(),
        }
    }

    pub fn watch(&mut self, target: ElementId) {
        if !self.waiting.contains(&target) {
            self.waiting.push(target);
        }
    }

    pub fn is_done(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn waiting(&self) -> &[ElementId] {
        &self.waiting
    }

    /// Remove and return every waiting element whose top edge crossed the
    /// trigger line. `top_of` returns `None` for elements no longer in the
    /// page; those are dropped without firing.
    pub fn poll(
        &mut self,
        viewport_height: f32,
        mut top_of: impl FnMut(ElementId) -> Option<f32>,
    ) -> Vec<ElementId> {
        let trigger = self.trigger;
        let mut fired = Vec::new();
        self.waiting.retain(|&id| match top_of(id) {
            Some(top) if trigger.is_crossed(top, viewport_height) => {
                fired.push(id);
                false
            }
            Some(_) => true,
            None => false,
        });
        fired
    }
}
