// Tween recipes for the page's one-off animations.

use crate::constants::*;
use crate::easing::Easing;
use crate::tween::{Property, PropertyList, Repeat, TweenVars};
use smallvec::smallvec;

/// `from` vars for the `index`th hero element; `None` past the last one.
pub fn hero_entrance(index: usize) -> Option<TweenVars> {
    if index >= HERO_SELECTORS.len() {
        return None;
    }
    Some(
        TweenVars::new(HERO_DURATION_MS, HERO_EASE)
            .with(Property::Y, HERO_FROM_Y[index])
            .with(Property::X, HERO_FROM_X[index])
            .with(Property::RotationY, HERO_FROM_ROTATION_Y[index])
            .with(Property::Opacity, 0.0)
            .delay(HERO_DELAY_MS[index]),
    )
}

/// Hidden state a reveal card holds until its trigger fires.
pub fn reveal_hidden() -> PropertyList {
    smallvec![
        (Property::Y, REVEAL_FROM_Y),
        (Property::Opacity, 0.0),
        (Property::Scale, REVEAL_FROM_SCALE),
    ]
}

/// Tween from [`reveal_hidden`] back to the resting transform.
pub fn reveal(easing: Easing) -> (PropertyList, TweenVars) {
    (
        reveal_hidden(),
        TweenVars::new(REVEAL_DURATION_MS, easing)
            .with(Property::Y, 0.0)
            .with(Property::Opacity, 1.0)
            .with(Property::Scale, 1.0),
    )
}

pub fn globe_float() -> TweenVars {
    TweenVars::new(GLOBE_FLOAT_DURATION_MS, GLOBE_FLOAT_EASE)
        .with(Property::Y, GLOBE_FLOAT_Y)
        .repeat(Repeat::Infinite)
        .yoyo(true)
}

pub fn hover_image_enter() -> TweenVars {
    TweenVars::new(HOVER_DURATION_MS, HOVER_ENTER_EASE)
        .with(Property::Scale, HOVER_IMAGE_SCALE)
        .with(Property::RotationZ, HOVER_IMAGE_ROTATION_Z)
        .with(Property::Brightness, HOVER_IMAGE_BRIGHTNESS)
        .with(Property::Contrast, HOVER_IMAGE_CONTRAST)
}

pub fn hover_card_enter() -> TweenVars {
    TweenVars::new(HOVER_DURATION_MS, HOVER_ENTER_EASE).with(Property::Scale, HOVER_CARD_SCALE)
}

/// Applied to both the image and its card.
pub fn hover_leave() -> TweenVars {
    TweenVars::new(HOVER_DURATION_MS, HOVER_LEAVE_EASE)
        .with(Property::Scale, 1.0)
        .with(Property::RotationZ, 0.0)
        .with(Property::Brightness, 1.0)
        .with(Property::Contrast, 1.0)
}

/// Start values and vars of the keyboard press pulse.
pub fn press_pulse() -> (PropertyList, TweenVars) {
    pulse(PRESS_FROM_SCALE, PRESS_TO_SCALE, PRESS_DURATION_MS, PRESS_EASE)
}

/// Start values and vars of the tour button pulse.
pub fn tour_pulse() -> (PropertyList, TweenVars) {
    pulse(
        TOUR_FROM_SCALE,
        TOUR_TO_SCALE,
        TOUR_DURATION_MS,
        Easing::default(),
    )
}

fn pulse(from: f32, to: f32, duration_ms: f64, easing: Easing) -> (PropertyList, TweenVars) {
    (
        smallvec![(Property::Scale, from)],
        TweenVars::new(duration_ms, easing)
            .with(Property::Scale, to)
            .repeat(Repeat::Count(1))
            .yoyo(true),
    )
}

/// Keys that activate a focused artifact.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Whether a nav click on `href` should skip the browser's own navigation.
#[inline]
pub fn is_hash_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Element id named by an in-page link, e.g. `"#work"` gives `"work"`.
/// Other links (and a bare `"#"`) give `None`.
#[inline]
pub fn in_page_anchor(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
