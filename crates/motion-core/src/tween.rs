// Tween timeline: interpolates element transforms over time.
// Only the subset the page needs is modelled: `to`/`from`/`from_to` tweens,
// delays, repeat with optional yoyo, and overwrite of overlapping properties.
// Time is passed in explicitly as milliseconds so the timeline runs the same
// on the host and under `requestAnimationFrame`.

use crate::easing::Easing;
use crate::port::{AnimationPort, ElementId};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    RotationX,
    RotationY,
    RotationZ,
    Scale,
    Opacity,
    Brightness,
    Contrast,
}

/// Animated render state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation in px.
    pub x: f32,
    pub y: f32,
    /// Rotations in degrees.
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub brightness: f32,
    pub contrast: f32,
    /// Perspective distance in px for the element's own 3D transform.
    pub perspective: Option<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            scale: 1.0,
            opacity: 1.0,
            brightness: 1.0,
            contrast: 1.0,
            perspective: None,
        }
    }
}

impl Transform {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::RotationX => self.rotation_x,
            Property::RotationY => self.rotation_y,
            Property::RotationZ => self.rotation_z,
            Property::Scale => self.scale,
            Property::Opacity => self.opacity,
            Property::Brightness => self.brightness,
            Property::Contrast => self.contrast,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::RotationX => self.rotation_x = value,
            Property::RotationY => self.rotation_y = value,
            Property::RotationZ => self.rotation_z = value,
            Property::Scale => self.scale = value,
            Property::Opacity => self.opacity = value,
            Property::Brightness => self.brightness = value,
            Property::Contrast => self.contrast = value,
        }
    }

    /// CSS `transform` value. Identity parts are omitted; a full identity
    /// yields `"none"`.
    pub fn css_transform(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({}px)", p));
        }
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.rotation_z != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotation_z));
        }
        if self.rotation_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotation_y));
        }
        if self.rotation_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotation_x));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// CSS `filter` value, `"none"` when both factors are neutral.
    pub fn css_filter(&self) -> String {
        if self.brightness == 1.0 && self.contrast == 1.0 {
            "none".to_string()
        } else {
            format!(
                "brightness({}) contrast({})",
                self.brightness, self.contrast
            )
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Extra cycles after the first one.
    Count(u32),
    Infinite,
}

pub type PropertyList = SmallVec<[(Property, f32); 4]>;

/// Target values and timing of one tween.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenVars {
    pub props: PropertyList,
    pub perspective: Option<f32>,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl TweenVars {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            props: SmallVec::new(),
            perspective: None,
            duration_ms,
            delay_ms: 0.0,
            easing,
            repeat: Repeat::Count(0),
            yoyo: false,
        }
    }

    /// Add (or replace) a property target.
    pub fn with(mut self, property: Property, value: f32) -> Self {
        match self.props.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.props.push((property, value)),
        }
        self
    }

    pub fn perspective(mut self, px: f32) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn value(&self, property: Property) -> Option<f32> {
        self.props
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}

#[derive(Clone, Debug)]
struct Track {
    property: Property,
    /// Captured when the tween starts unless given up front.
    from: Option<f32>,
    to: f32,
}

#[derive(Clone, Debug)]
struct Tween {
    target: ElementId,
    tracks: SmallVec<[Track; 4]>,
    perspective: Option<f32>,
    created_ms: f64,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
    repeat: Repeat,
    yoyo: bool,
    started: bool,
}

impl Tween {
    fn new(target: ElementId, vars: &TweenVars, created_ms: f64) -> Self {
        let tracks = vars
            .props
            .iter()
            .map(|&(property, to)| Track {
                property,
                from: None,
                to,
            })
            .collect();
        Self {
            target,
            tracks,
            perspective: vars.perspective,
            created_ms,
            duration_ms: vars.duration_ms.max(0.0),
            delay_ms: vars.delay_ms.max(0.0),
            easing: vars.easing,
            repeat: vars.repeat,
            yoyo: vars.yoyo,
            started: false,
        }
    }

    fn start(&mut self, state: &mut Transform) {
        for track in &mut self.tracks {
            if track.from.is_none() {
                track.from = Some(state.get(track.property));
            }
        }
        if let Some(p) = self.perspective {
            state.perspective = Some(p);
        }
        self.started = true;
    }

    /// Time fraction within the current cycle (already flipped for yoyo) and
    /// whether the tween has finished.
    fn progress(&self, local_ms: f64) -> (f32, bool) {
        let total_cycles = match self.repeat {
            Repeat::Count(n) => Some(n as f64 + 1.0),
            Repeat::Infinite => None,
        };
        let final_fraction = |cycles: f64| {
            let last = cycles - 1.0;
            if self.yoyo && last % 2.0 == 1.0 {
                0.0
            } else {
                1.0
            }
        };
        if self.duration_ms <= 0.0 {
            return (final_fraction(total_cycles.unwrap_or(1.0)), true);
        }
        let cycle = (local_ms / self.duration_ms).floor();
        if let Some(total) = total_cycles {
            if cycle >= total {
                return (final_fraction(total), true);
            }
        }
        let mut t = ((local_ms - cycle * self.duration_ms) / self.duration_ms) as f32;
        if self.yoyo && cycle % 2.0 == 1.0 {
            t = 1.0 - t;
        }
        (t, false)
    }

    fn render(&self, state: &mut Transform, t: f32) {
        let eased = self.easing.apply(t);
        for track in &self.tracks {
            let from = track.from.unwrap_or(track.to);
            // exact endpoints, so settled elements serialize as identity
            let value = if eased == 1.0 {
                track.to
            } else if eased == 0.0 {
                from
            } else {
                from + (track.to - from) * eased
            };
            state.set(track.property, value);
        }
    }
}

/// Owns every running tween and the current transform of each animated
/// element.
#[derive(Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    transforms: FnvHashMap<ElementId, Transform>,
    now_ms: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock; never moves backwards.
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Advance the clock without rendering. New tweens start from this time.
    pub fn set_now(&mut self, now_ms: f64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    pub fn transform(&self, target: ElementId) -> Transform {
        self.transforms.get(&target).copied().unwrap_or_default()
    }

    /// Transform of `target` if the timeline has written one yet. A `to`
    /// tween writes nothing until its first tick.
    pub fn rendered(&self, target: ElementId) -> Option<Transform> {
        self.transforms.get(&target).copied()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn is_animating(&self, target: ElementId) -> bool {
        self.tweens.iter().any(|t| t.target == target)
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Tween `target` toward `vars`.
    pub fn to(&mut self, target: ElementId, vars: TweenVars) {
        self.overwrite(target, &vars.props);
        let tween = Tween::new(target, &vars, self.now_ms);
        self.tweens.push(tween);
    }

    /// Tween `target` from `vars` to its current values. Start values are
    /// rendered immediately, even when the tween is delayed.
    pub fn from(&mut self, target: ElementId, vars: TweenVars) {
        self.overwrite(target, &vars.props);
        let state = self.transforms.entry(target).or_default();
        let mut tween = Tween::new(target, &vars, self.now_ms);
        for track in &mut tween.tracks {
            let start = track.to;
            track.to = state.get(track.property);
            track.from = Some(start);
            state.set(track.property, start);
        }
        self.tweens.push(tween);
    }

    /// Tween `target` between explicit start and end values. Start values are
    /// rendered immediately.
    pub fn from_to(&mut self, target: ElementId, from: &[(Property, f32)], vars: TweenVars) {
        self.overwrite(target, &vars.props);
        let state = self.transforms.entry(target).or_default();
        let mut tween = Tween::new(target, &vars, self.now_ms);
        for track in &mut tween.tracks {
            if let Some(&(_, start)) = from.iter().find(|(p, _)| *p == track.property) {
                track.from = Some(start);
                state.set(track.property, start);
            }
        }
        self.tweens.push(tween);
    }

    /// Jump `target` to `values` at once, killing any tween on those
    /// properties.
    pub fn set(&mut self, target: ElementId, values: &[(Property, f32)]) {
        self.overwrite(target, values);
        let state = self.transforms.entry(target).or_default();
        for &(property, value) in values {
            state.set(property, value);
        }
    }

    /// Drop every tween on `target` and forget its transform.
    pub fn kill(&mut self, target: ElementId) {
        self.tweens.retain(|t| t.target != target);
        self.transforms.remove(&target);
    }

    /// Advance to `now_ms`, render every active tween and drop finished ones.
    /// Returns the targets whose transform changed.
    pub fn tick(&mut self, now_ms: f64) -> Vec<ElementId> {
        self.set_now(now_ms);
        let now = self.now_ms;
        let transforms = &mut self.transforms;
        let mut changed: Vec<ElementId> = Vec::new();
        self.tweens.retain_mut(|tween| {
            let local = now - tween.created_ms - tween.delay_ms;
            if local < 0.0 {
                return true;
            }
            let state = transforms.entry(tween.target).or_default();
            if !tween.started {
                tween.start(state);
            }
            let (t, done) = tween.progress(local);
            tween.render(state, t);
            if !changed.contains(&tween.target) {
                changed.push(tween.target);
            }
            !done
        });
        changed
    }

    /// Remove the tracks `props` touches from earlier tweens on `target`.
    fn overwrite(&mut self, target: ElementId, props: &[(Property, f32)]) {
        if props.is_empty() {
            return;
        }
        self.tweens.retain_mut(|tween| {
            if tween.target != target {
                return true;
            }
            tween
                .tracks
                .retain(|track| !props.iter().any(|(p, _)| *p == track.property));
            !tween.tracks.is_empty()
        });
    }
}

impl AnimationPort for Timeline {
    fn animate_to(&mut self, target: ElementId, vars: TweenVars) {
        self.to(target, vars);
    }
}
