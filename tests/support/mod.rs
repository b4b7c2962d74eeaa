// Recording doubles for the scheduler and animation seams.

#![allow(dead_code)]
use motion_core::{AnimationPort, ElementId, FrameHandle, FrameScheduler, TweenVars};

#[derive(Default)]
pub struct RecordingScheduler {
    next: i32,
    pub pending: Vec<(FrameHandle, ElementId)>,
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    pub refuse: bool,
}

impl RecordingScheduler {
    pub fn pending_for(&self, target: ElementId) -> usize {
        self.pending.iter().filter(|(_, t)| *t == target).count()
    }

    /// Drain the queue like a repaint would, returning the targets to run.
    pub fn fire_all(&mut self) -> Vec<ElementId> {
        self.pending.drain(..).map(|(_, t)| t).collect()
    }
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self, target: ElementId) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested += 1;
        let h = FrameHandle(self.next);
        self.pending.push((h, target));
        Some(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _)| *h != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
pub struct RecordingPort {
    pub calls: Vec<(ElementId, TweenVars)>,
}

impl RecordingPort {
    pub fn last(&self) -> Option<&(ElementId, TweenVars)> {
        self.calls.last()
    }
}

impl AnimationPort for RecordingPort {
    fn animate_to(&mut self, target: ElementId, vars: TweenVars) {
        self.calls.push((target, vars));
    }
}
