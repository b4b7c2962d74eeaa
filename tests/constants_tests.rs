// Host-side tests for the motion tuning constants and their relationships.

use motion_core::constants::*;
use motion_core::{Easing, MotionConfig, ScrollTrigger};

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    assert!(TILT_DURATION_MS > 0.0);
    assert!(TILT_RESET_DURATION_MS > 0.0);
    assert!(HERO_DURATION_MS > 0.0);
    assert!(REVEAL_DURATION_MS > 0.0);
    assert!(GLOBE_FLOAT_DURATION_MS > 0.0);
    assert!(HOVER_DURATION_MS > 0.0);
    assert!(PRESS_DURATION_MS > 0.0);
    assert!(TOUR_DURATION_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reset_is_slower_than_tilt() {
    // the spring-back must outlast the follow tween
    assert!(TILT_RESET_DURATION_MS > TILT_DURATION_MS);
}

#[test]
fn hero_delays_are_staggered() {
    assert!(HERO_DELAY_MS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(HERO_SELECTORS.len(), HERO_FROM_X.len());
    assert_eq!(HERO_SELECTORS.len(), HERO_FROM_Y.len());
    assert_eq!(HERO_SELECTORS.len(), HERO_FROM_ROTATION_Y.len());
}

#[test]
fn tilt_groups_are_sane() {
    for (selector, x, y, perspective) in TILT_GROUPS {
        assert!(selector.starts_with('.'));
        assert!(x > 0.0 && y > 0.0);
        assert!(perspective > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulses_grow_then_settle_below_rest() {
    assert!(PRESS_FROM_SCALE < 1.0 && PRESS_TO_SCALE > 1.0);
    assert!(TOUR_FROM_SCALE < 1.0 && TOUR_TO_SCALE > 1.0);
}

#[test]
fn reveal_start_parses() {
    let t: ScrollTrigger = REVEAL_START.parse().unwrap();
    assert!((t.start_fraction() - 0.85).abs() < 1e-6);
    assert!(MotionConfig::default().validate().is_ok());
}

#[test]
fn reveal_ease_name_matches_curve() {
    assert_eq!(REVEAL_EASE_NAME.parse::<Easing>().unwrap(), REVEAL_EASE);
}
