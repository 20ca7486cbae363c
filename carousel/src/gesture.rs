use crate::engine::TransitionEngine;
use crate::{Direction, DragOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
struct SnapBack {
    from: f32,
    started_ms: u64,
    duration_ms: u64,
}

impl SnapBack {
    fn deadline(&self) -> u64 {
        self.started_ms.saturating_add(self.duration_ms)
    }
}

/// Turns a pointer-down → move → up sequence into a drag offset and, on release, into either
/// a transition request (commit) or a snap-back (cancel).
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    origin: f32,
    offset: f32,
    dragging: bool,
    snap_back: Option<SnapBack>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_snapping_back(&self) -> bool {
        self.snap_back.is_some()
    }

    /// Current displacement. While snapping back this is the release offset; the renderer
    /// animates it towards zero using [`GestureTracker::snap_back_progress`].
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Starts a drag at `x`. Ignored unless the engine is idle and has items.
    pub fn on_drag_start(&mut self, x: f32, engine: &TransitionEngine) -> bool {
        if engine.count() == 0 || !engine.is_idle() {
            ctrace!(x, phase = ?engine.phase(), "drag start ignored");
            return false;
        }
        self.origin = x;
        self.offset = 0.0;
        self.dragging = true;
        self.snap_back = None;
        true
    }

    /// Updates the live offset. Returns the new offset, or `None` when no drag is active.
    pub fn on_drag_move(&mut self, x: f32) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        self.offset = x - self.origin;
        Some(self.offset)
    }

    /// Finishes the drag at `x` and classifies it against `threshold` (exclusive).
    ///
    /// Returns `None` when no drag was active.
    pub fn on_drag_end(
        &mut self,
        x: f32,
        threshold: f32,
        snap_back_duration_ms: u64,
        now_ms: u64,
        engine: &mut TransitionEngine,
    ) -> Option<DragOutcome> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let offset = x - self.origin;

        if offset > threshold || offset < -threshold {
            self.offset = 0.0;
            self.snap_back = None;
            let direction = if offset < 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            let target = direction.step(engine.current_index(), engine.count())?;
            let accepted = engine.request_transition(target, direction, now_ms);
            cdebug!(offset, to = target, accepted, "drag committed");
            return Some(DragOutcome::Commit {
                direction,
                target,
                offset,
                accepted,
            });
        }

        cdebug!(offset, threshold, "drag cancelled");
        self.begin_snap_back(offset, snap_back_duration_ms, now_ms);
        Some(DragOutcome::Cancel { offset })
    }

    /// Aborts an active drag (pointer/touch cancel) as if it were released in place without
    /// reaching the threshold.
    pub fn on_drag_cancel(&mut self, snap_back_duration_ms: u64, now_ms: u64) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        let offset = self.offset;
        self.begin_snap_back(offset, snap_back_duration_ms, now_ms);
        true
    }

    fn begin_snap_back(&mut self, offset: f32, duration_ms: u64, now_ms: u64) {
        if offset == 0.0 {
            self.offset = 0.0;
            self.snap_back = None;
            return;
        }
        self.offset = offset;
        self.snap_back = Some(SnapBack {
            from: offset,
            started_ms: now_ms,
            duration_ms,
        });
    }

    /// Finishes a snap-back whose duration has elapsed. Returns `true` when it settled.
    pub fn settle(&mut self, now_ms: u64) -> bool {
        let Some(snap) = self.snap_back else {
            return false;
        };
        if now_ms < snap.deadline() {
            return false;
        }
        self.snap_back = None;
        self.offset = 0.0;
        true
    }

    pub fn snap_back_deadline(&self) -> Option<u64> {
        self.snap_back.map(|s| s.deadline())
    }

    /// `(release_offset, progress)` of an active snap-back.
    pub fn snap_back_progress(&self, now_ms: u64) -> Option<(f32, f32)> {
        let snap = self.snap_back?;
        if snap.duration_ms == 0 {
            return Some((snap.from, 1.0));
        }
        let elapsed = now_ms.saturating_sub(snap.started_ms);
        let t = (elapsed as f32 / snap.duration_ms as f32).clamp(0.0, 1.0);
        Some((snap.from, t))
    }

    /// Drops any drag or snap-back state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
