// Host-side tests for the pointer tilt state machine, driven through
// recording doubles instead of a live page.

mod support;

use glam::Vec2;
use motion_core::{
    BoundingBox, Easing, ElementId, Property, TiltConfig, TiltEffect, TiltPhase,
};
use support::{RecordingPort, RecordingScheduler};

const CARD: ElementId = ElementId(1);
const OTHER: ElementId = ElementId(2);

fn card_box() -> BoundingBox {
    BoundingBox::new(100.0, 200.0, 400.0, 200.0)
}

/// Viewport point at box-relative (px, py) of `card_box()`.
fn at(px: f32, py: f32) -> Vec2 {
    let b = card_box();
    Vec2::new(b.left + px * b.width, b.top + py * b.height)
}

fn setup() -> (TiltEffect, RecordingScheduler, RecordingPort) {
    let mut effect = TiltEffect::new();
    effect.attach(CARD, TiltConfig::new(10.0, 18.0, 900.0));
    (effect, RecordingScheduler::default(), RecordingPort::default())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn scenario_quarter_point() {
    let (mut effect, mut sched, mut port) = setup();
    assert!(effect.pointer_move(CARD, at(0.75, 0.25), &mut sched));
    for t in sched.fire_all() {
        effect.frame(t, card_box(), &mut port);
    }
    let (target, vars) = port.last().unwrap();
    assert_eq!(*target, CARD);
    assert!(approx(vars.value(Property::RotationX).unwrap(), -2.5));
    assert!(approx(vars.value(Property::RotationY).unwrap(), -4.5));
    assert_eq!(vars.perspective, Some(900.0));
    assert_eq!(vars.duration_ms, 350.0);
    assert_eq!(vars.easing, Easing::POWER2_OUT);
}

#[test]
fn moves_within_a_frame_coalesce_to_the_last_sample() {
    let (mut effect, mut sched, mut port) = setup();
    assert!(effect.pointer_move(CARD, at(0.0, 0.0), &mut sched));
    assert!(!effect.pointer_move(CARD, at(1.0, 1.0), &mut sched));
    assert!(!effect.pointer_move(CARD, at(0.5, 0.5), &mut sched));
    assert_eq!(sched.requested, 1);
    assert_eq!(sched.pending_for(CARD), 1);
    assert!(effect.is_frame_pending(CARD));

    for t in sched.fire_all() {
        effect.frame(t, card_box(), &mut port);
    }
    assert_eq!(port.calls.len(), 1);
    let vars = &port.calls[0].1;
    assert!(approx(vars.value(Property::RotationX).unwrap(), 0.0));
    assert!(approx(vars.value(Property::RotationY).unwrap(), 0.0));
    assert!(!effect.is_frame_pending(CARD));
}

#[test]
fn at_most_one_frame_pending_under_rapid_moves() {
    let (mut effect, mut sched, mut port) = setup();
    for frame in 0..5 {
        for i in 0..50 {
            effect.pointer_move(CARD, at(i as f32 / 50.0, 0.3), &mut sched);
            assert!(sched.pending_for(CARD) <= 1);
        }
        for t in sched.fire_all() {
            effect.frame(t, card_box(), &mut port);
        }
        assert_eq!(port.calls.len(), frame + 1);
    }
    assert_eq!(sched.requested, 5);
}

#[test]
fn top_left_corner_gives_the_extremes() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_move(CARD, at(0.0, 0.0), &mut sched);
    sched.fire_all();
    let rot = effect.frame(CARD, card_box(), &mut port).unwrap();
    assert!(approx(rot.x, -5.0));
    assert!(approx(rot.y, 9.0));
}

#[test]
fn samples_outside_the_box_exceed_the_maximum() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_move(CARD, at(-0.5, 1.5), &mut sched);
    sched.fire_all();
    let rot = effect.frame(CARD, card_box(), &mut port).unwrap();
    assert!(approx(rot.x, 10.0));
    assert!(approx(rot.y, 18.0));
}

#[test]
fn frame_reads_the_box_at_fire_time() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_move(CARD, Vec2::new(300.0, 300.0), &mut sched);
    sched.fire_all();
    // element scrolled up by 100px between the move and the repaint
    let moved = BoundingBox::new(100.0, 100.0, 400.0, 200.0);
    let rot = effect.frame(CARD, moved, &mut port).unwrap();
    assert!(approx(rot.x, 5.0));
    assert!(approx(rot.y, 0.0));
}

#[test]
fn leave_cancels_the_pending_frame_and_resets() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_move(CARD, at(0.9, 0.9), &mut sched);
    assert_eq!(sched.pending_for(CARD), 1);

    effect.pointer_leave(CARD, 1000.0, &mut sched, &mut port);
    assert_eq!(sched.pending_for(CARD), 0);
    assert_eq!(sched.cancelled.len(), 1);

    let (_, vars) = port.last().unwrap();
    assert_eq!(vars.value(Property::RotationX), Some(0.0));
    assert_eq!(vars.value(Property::RotationY), Some(0.0));
    assert_eq!(vars.duration_ms, 550.0);
    assert_eq!(vars.easing, Easing::elastic_out(1.0, 0.6));

    // a stale callback that slipped past cancellation applies nothing
    assert!(effect.frame(CARD, card_box(), &mut port).is_none());
    assert_eq!(port.calls.len(), 1);
}

#[test]
fn leave_without_pending_frame_still_resets() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_leave(CARD, 0.0, &mut sched, &mut port);
    assert!(sched.cancelled.is_empty());
    assert_eq!(port.calls.len(), 1);
}

#[test]
fn phases_follow_the_state_machine() {
    let (mut effect, mut sched, mut port) = setup();
    assert_eq!(effect.phase(CARD, 0.0), Some(TiltPhase::Idle));
    effect.pointer_move(CARD, at(0.2, 0.2), &mut sched);
    assert_eq!(effect.phase(CARD, 0.0), Some(TiltPhase::FrameScheduled));
    sched.fire_all();
    effect.frame(CARD, card_box(), &mut port);
    assert_eq!(effect.phase(CARD, 16.0), Some(TiltPhase::Idle));

    effect.pointer_leave(CARD, 100.0, &mut sched, &mut port);
    assert_eq!(effect.phase(CARD, 200.0), Some(TiltPhase::Resetting));
    assert_eq!(effect.phase(CARD, 650.0), Some(TiltPhase::Idle));

    effect.pointer_leave(CARD, 1000.0, &mut sched, &mut port);
    effect.pointer_move(CARD, at(0.2, 0.2), &mut sched);
    assert_eq!(effect.phase(CARD, 1010.0), Some(TiltPhase::FrameScheduled));
    assert_eq!(effect.phase(OTHER, 0.0), None);
}

#[test]
fn elements_are_independent() {
    let (mut effect, mut sched, mut port) = setup();
    effect.attach(OTHER, TiltConfig::new(8.0, 10.0, 700.0));
    effect.pointer_move(CARD, at(0.0, 0.5), &mut sched);
    effect.pointer_move(OTHER, at(1.0, 0.5), &mut sched);
    assert_eq!(sched.requested, 2);

    effect.pointer_leave(CARD, 0.0, &mut sched, &mut port);
    assert!(effect.is_frame_pending(OTHER));
    for t in sched.fire_all() {
        effect.frame(t, card_box(), &mut port);
    }
    let (target, vars) = port.last().unwrap();
    assert_eq!(*target, OTHER);
    assert!(approx(vars.value(Property::RotationY).unwrap(), -5.0));
    assert_eq!(vars.perspective, Some(700.0));
}

#[test]
fn refused_frame_leaves_the_element_retryable() {
    let (mut effect, mut sched, mut port) = setup();
    sched.refuse = true;
    assert!(!effect.pointer_move(CARD, at(0.1, 0.1), &mut sched));
    assert!(!effect.is_frame_pending(CARD));
    sched.refuse = false;
    assert!(effect.pointer_move(CARD, at(0.1, 0.1), &mut sched));
    sched.fire_all();
    assert!(effect.frame(CARD, card_box(), &mut port).is_some());
}

#[test]
fn empty_box_applies_nothing() {
    let (mut effect, mut sched, mut port) = setup();
    effect.pointer_move(CARD, at(0.3, 0.3), &mut sched);
    sched.fire_all();
    assert!(effect
        .frame(CARD, BoundingBox::new(0.0, 0.0, 0.0, 0.0), &mut port)
        .is_none());
    assert!(port.calls.is_empty());
    assert!(!effect.is_frame_pending(CARD));
}

#[test]
fn unknown_and_detached_elements_are_ignored() {
    let (mut effect, mut sched, mut port) = setup();
    assert!(!effect.pointer_move(OTHER, at(0.5, 0.5), &mut sched));
    effect.pointer_leave(OTHER, 0.0, &mut sched, &mut port);
    assert!(port.calls.is_empty());

    let handle = effect.attach(OTHER, TiltConfig::default());
    effect.pointer_move(OTHER, at(0.5, 0.5), &mut sched);
    assert!(effect.detach(handle, &mut sched));
    assert_eq!(sched.cancelled.len(), 1);
    assert!(!effect.contains(OTHER));
    assert!(effect.frame(OTHER, card_box(), &mut port).is_none());
}

#[test]
fn reattach_replaces_config() {
    let (mut effect, _sched, _port) = setup();
    effect.attach(CARD, TiltConfig::new(2.0, 2.0, 500.0));
    assert_eq!(effect.len(), 1);
    assert_eq!(effect.config(CARD), Some(TiltConfig::new(2.0, 2.0, 500.0)));
}
