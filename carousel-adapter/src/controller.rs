use carousel::{
    Carousel, CarouselItem, CarouselOptions, CarouselSnapshot, DragOutcome, Phase,
    PresentationMode,
};

use crate::{CardPose, PoseAnimator, PoseOptions};

/// What a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub snapshot: CarouselSnapshot,
    pub pose: CardPose,
    /// Whether carousel state changed since the previous tick.
    pub changed: bool,
    /// Earliest instant the controller has work to do, for timer-driven hosts.
    pub next_deadline: Option<u64>,
}

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and turns its state into
/// card poses.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - the input methods (`on_drag_*`, `go_to`, `next`, `prev`, `on_visibility`) as UI events occur
/// - `tick(now_ms)` each animation frame while [`Controller::wants_animation_frames`] is true,
///   and otherwise at [`Frame::next_deadline`]
#[derive(Clone, Debug)]
pub struct Controller<T> {
    c: Carousel<T>,
    poses: PoseAnimator,
    /// Exit deadline of the transition whose start pose `poses` holds.
    posed_exit: Option<u64>,
}

impl<T: CarouselItem> Controller<T> {
    pub fn new(items: impl IntoIterator<Item = T>, options: CarouselOptions, now_ms: u64) -> Self {
        Self::from_carousel(Carousel::new(items, options, now_ms))
    }

    pub fn from_carousel(c: Carousel<T>) -> Self {
        Self {
            c,
            poses: PoseAnimator::default(),
            posed_exit: None,
        }
    }

    pub fn with_pose_options(mut self, options: PoseOptions) -> Self {
        self.poses.set_options(options);
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<T> {
        self.c
    }

    pub fn poses(&self) -> &PoseAnimator {
        &self.poses
    }

    /// True while something is moving on screen (flip, drag or snap-back).
    pub fn wants_animation_frames(&self) -> bool {
        let s = self.c.snapshot();
        !s.phase.is_idle() || s.is_dragging || s.is_snapping_back
    }

    /// Advances the carousel and samples the card pose at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        let skew = self.idle_skew(now_ms);
        let changed = self.c.tick(now_ms);
        self.pose_new_exit(skew);
        self.frame_at(now_ms, changed)
    }

    /// Samples a frame without advancing state.
    pub fn frame(&self, now_ms: u64) -> Frame {
        self.frame_at(now_ms, false)
    }

    fn frame_at(&self, now_ms: u64, changed: bool) -> Frame {
        let snapshot = self.c.snapshot_at(now_ms);
        let pose = if self.has_unposed_exit() {
            // Started behind the controller's back (`carousel_mut`): flip from rest.
            let mut poses = self.poses;
            poses.begin_exit_from_deg(0.0);
            poses.pose(&snapshot)
        } else {
            self.poses.pose(&snapshot)
        };
        Frame {
            snapshot,
            pose,
            changed,
            next_deadline: self.c.next_deadline(),
        }
    }

    /// Skew of a resting, dragged or snapping-back card; `0` mid-transition.
    fn idle_skew(&self, now_ms: u64) -> f32 {
        let snapshot = self.c.snapshot_at(now_ms);
        if !snapshot.phase.is_idle() {
            return 0.0;
        }
        self.poses.pose(&snapshot).rotate_y_deg
    }

    fn has_unposed_exit(&self) -> bool {
        self.c.phase() == Phase::Exiting && self.c.phase_deadline() != self.posed_exit
    }

    fn pose_new_exit(&mut self, from_deg: f32) {
        if self.has_unposed_exit() {
            self.poses.begin_exit_from_deg(from_deg);
            self.posed_exit = self.c.phase_deadline();
        }
    }

    fn navigate(&mut self, now_ms: u64, f: impl FnOnce(&mut Carousel<T>) -> bool) -> bool {
        let skew = self.idle_skew(now_ms);
        let accepted = f(&mut self.c);
        if accepted {
            self.pose_new_exit(skew);
        }
        accepted
    }

    /// Flips to `index`. A card still snapping back flips on from its current skew.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        self.navigate(now_ms, |c| c.go_to(index, now_ms))
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(now_ms, |c| c.next(now_ms))
    }

    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.navigate(now_ms, |c| c.prev(now_ms))
    }

    pub fn on_drag_start(&mut self, x: f32, now_ms: u64) -> bool {
        self.c.on_drag_start(x, now_ms)
    }

    pub fn on_drag_move(&mut self, x: f32) -> Option<f32> {
        self.c.on_drag_move(x)
    }

    /// Releases the drag. A committed drag flips onward from the skewed pose it was released at.
    pub fn on_drag_end(&mut self, x: f32, now_ms: u64) -> Option<DragOutcome> {
        let outcome = self.c.on_drag_end(x, now_ms)?;
        if let DragOutcome::Commit {
            offset,
            accepted: true,
            ..
        } = outcome
        {
            let skew = self.poses.drag_rotation(offset);
            self.pose_new_exit(skew);
        }
        Some(outcome)
    }

    pub fn on_drag_cancel(&mut self, now_ms: u64) -> bool {
        self.c.on_drag_cancel(now_ms)
    }

    pub fn on_visibility(&mut self, ratio: f32, now_ms: u64) -> bool {
        self.c.on_visibility(ratio, now_ms)
    }

    pub fn set_presentation(&mut self, presentation: PresentationMode, now_ms: u64) {
        self.c.set_presentation(presentation, now_ms);
    }

    pub fn unmount(&mut self) {
        self.c.unmount();
    }
}
