use alloc::vec::Vec;
use core::cell::Cell;

use crate::autoplay::AutoplayTimer;
use crate::engine::TransitionEngine;
use crate::gesture::GestureTracker;
use crate::item::{same_identity, sort_by_rank};
use crate::visibility::VisibilityGate;
use crate::{
    CarouselItem, CarouselOptions, CarouselSnapshot, Direction, DragOutcome, MountEpoch, Phase,
    PhaseChange, PresentationMode, TransitionSource,
};

/// A headless card carousel.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects and never schedules anything itself.
/// - Your adapter drives it with input events and timestamps (`now_ms`), and calls
///   [`Carousel::tick`] from a frame loop or a timer armed for [`Carousel::next_deadline`].
/// - Rendering reads [`Carousel::snapshot`].
///
/// Three input channels can move the carousel: the autoplay timer, drag gestures and
/// navigation commands. They all go through one transition engine that accepts a request
/// only while idle, so at most one transition is ever in flight.
///
/// For poses, tweens and a frame-producing controller, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    options: CarouselOptions,
    items: Vec<T>,
    engine: TransitionEngine,
    gesture: GestureTracker,
    autoplay: AutoplayTimer,
    visibility: VisibilityGate,
    source: Option<TransitionSource>,
    mounted: bool,
    epoch: MountEpoch,
    now_ms: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T: CarouselItem> Carousel<T> {
    /// Mounts a carousel over `items`, sorted ascending by rank.
    pub fn new(items: impl IntoIterator<Item = T>, options: CarouselOptions, now_ms: u64) -> Self {
        let items = sort_by_rank(items.into_iter().collect());
        cdebug!(
            count = items.len(),
            presentation = ?options.presentation,
            autoplay_delay_ms = ?options.autoplay_delay_ms,
            "Carousel::new"
        );
        let mut c = Self {
            engine: TransitionEngine::new(
                items.len(),
                options.exit_duration_ms,
                options.enter_duration_ms,
            ),
            gesture: GestureTracker::new(),
            autoplay: AutoplayTimer::new(),
            visibility: VisibilityGate::new(
                options.visibility_threshold,
                options.visibility_policy,
            ),
            items,
            options,
            source: None,
            mounted: true,
            epoch: MountEpoch(1),
            now_ms,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.refresh_autoplay(now_ms);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions, now_ms: u64) {
        let presentation_changed = self.options.presentation != options.presentation;
        let delay_changed = self.options.autoplay_delay_ms != options.autoplay_delay_ms;
        self.options = options;
        self.now_ms = now_ms;
        self.engine
            .set_durations(self.options.exit_duration_ms, self.options.enter_duration_ms);
        self.visibility.set_policy(
            self.options.visibility_threshold,
            self.options.visibility_policy,
        );
        ctrace!(options = ?self.options, "Carousel::set_options");
        if presentation_changed || delay_changed {
            self.autoplay.disarm();
        }
        self.refresh_autoplay(now_ms);
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn set_presentation(&mut self, presentation: PresentationMode, now_ms: u64) {
        if self.options.presentation == presentation {
            return;
        }
        self.update_options(now_ms, |o| o.presentation = presentation);
    }

    /// Replaces the item list.
    ///
    /// If the new list (after sorting) has the same key sequence, only the item values are
    /// swapped and the carousel keeps its state. Otherwise the carousel is remounted: any
    /// in-flight transition, drag or timer is dropped and the index returns to 0. The
    /// visibility gate is kept since the widget itself did not move.
    ///
    /// An unmounted carousel stays unmounted: the list is stored and the index reset, but no
    /// timer is armed and no notification is sent.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>, now_ms: u64) {
        let items = sort_by_rank(items.into_iter().collect());
        self.now_ms = now_ms;
        if !self.mounted {
            self.items = items;
            self.engine.reset(self.items.len());
            return;
        }
        if same_identity(&self.items, &items) {
            self.items = items;
            self.notify();
            return;
        }

        cdebug!(from = self.items.len(), to = items.len(), "item identity changed: remount");
        self.items = items;
        self.engine.reset(self.items.len());
        self.gesture.reset();
        self.autoplay.disarm();
        self.epoch = MountEpoch(self.epoch.0.wrapping_add(1));
        self.refresh_autoplay(now_ms);
        self.notify();
    }

    /// Tears the carousel down: pending timers and animations are dropped without applying
    /// their state changes, and every handler becomes a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        cdebug!(phase = ?self.engine.phase(), "Carousel::unmount");
        self.mounted = false;
        self.engine.cancel();
        self.gesture.reset();
        self.autoplay.disarm();
        self.visibility.reset();
        self.epoch = MountEpoch(self.epoch.0.wrapping_add(1));
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn epoch(&self) -> MountEpoch {
        self.epoch
    }

    /// Whether a callback captured under `epoch` may still act on this carousel.
    pub fn is_current(&self, epoch: MountEpoch) -> bool {
        self.mounted && self.epoch == epoch
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.snapshot());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.engine.current_index())
    }

    /// Index of the item with `key`, if present.
    pub fn index_of_key(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|it| &it.key() == key)
    }

    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    pub fn pending_index(&self) -> Option<usize> {
        self.engine.pending_index()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn direction(&self) -> Direction {
        self.engine.direction()
    }

    /// Input channel that started the in-flight transition.
    pub fn transition_source(&self) -> Option<TransitionSource> {
        if self.engine.is_idle() {
            return None;
        }
        self.source
    }

    pub fn drag_offset(&self) -> f32 {
        self.gesture.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn presentation(&self) -> PresentationMode {
        self.options.presentation
    }

    /// End of the current phase, or `None` when idle.
    ///
    /// Adapters use it to tell one in-flight transition from the next.
    pub fn phase_deadline(&self) -> Option<u64> {
        self.engine.phase_deadline()
    }

    pub fn autoplay_deadline(&self) -> Option<u64> {
        self.autoplay.deadline()
    }

    /// Snapshot at the last timestamp the carousel observed.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.snapshot_at(self.now_ms)
    }

    /// Snapshot with phase/snap-back progress sampled at `now_ms`.
    pub fn snapshot_at(&self, now_ms: u64) -> CarouselSnapshot {
        let snap_back = self.gesture.snap_back_progress(now_ms);
        let progress = match snap_back {
            Some((_, t)) if self.engine.is_idle() => t,
            _ => self.engine.progress(now_ms),
        };
        CarouselSnapshot {
            count: self.items.len(),
            current_index: self.engine.current_index(),
            pending_index: self.engine.pending_index(),
            phase: self.engine.phase(),
            direction: self.engine.direction(),
            source: self.transition_source(),
            drag_offset: self.gesture.offset(),
            is_dragging: self.gesture.is_dragging(),
            is_snapping_back: snap_back.is_some(),
            progress,
        }
    }

    /// The earliest instant at which [`Carousel::tick`] has work to do.
    ///
    /// Hosts can arm a single timer for this instead of ticking every frame while idle.
    pub fn next_deadline(&self) -> Option<u64> {
        if !self.mounted {
            return None;
        }
        [
            self.engine.phase_deadline(),
            self.gesture.snap_back_deadline(),
            self.autoplay.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Advances animations, snap-back and autoplay to `now_ms`.
    ///
    /// Returns `true` when observable state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.now_ms = now_ms;
        let mut changed = self.advance_engine(now_ms);

        if self.gesture.settle(now_ms) {
            changed = true;
            self.refresh_autoplay(now_ms);
        }

        if self.autoplay.poll(now_ms).is_some() {
            if let Some(target) = Direction::Forward.step(self.current_index(), self.len()) {
                ctrace!(to = target, now_ms, "autoplay fired");
                changed |=
                    self.request(target, Direction::Forward, now_ms, TransitionSource::Autoplay);
            }
        }

        if changed {
            self.notify();
        }
        changed
    }

    fn advance_engine(&mut self, now_ms: u64) -> bool {
        let before = self.engine.current_index();
        let on_index_change = &self.options.on_index_change;
        let on_phase_change = &self.options.on_phase_change;
        let mut settled_at: Option<u64> = None;

        let changed = self.engine.advance(now_ms, |change: PhaseChange| {
            if let Some(cb) = on_phase_change {
                cb(change);
            }
            match (change.from, change.to) {
                (Phase::Exiting, Phase::Entering) => {
                    if change.current_index != before {
                        if let Some(cb) = on_index_change {
                            cb(before, change.current_index);
                        }
                    }
                }
                (Phase::Entering, Phase::Idle) => settled_at = Some(change.at_ms),
                _ => {}
            }
        });

        if let Some(at_ms) = settled_at {
            self.refresh_autoplay(at_ms);
        }
        changed
    }

    /// Arms or disarms autoplay to match the current state. An armed timer is never re-armed,
    /// so a stale deadline cannot pile up next to a fresh one.
    fn refresh_autoplay(&mut self, now_ms: u64) {
        let delay = match self.options.autoplay_delay_ms {
            Some(delay)
                if self.mounted
                    && !self.items.is_empty()
                    && self.options.presentation == PresentationMode::Compact
                    && self.visibility.is_open()
                    && self.engine.is_idle()
                    && !self.gesture.is_dragging() =>
            {
                delay
            }
            _ => {
                self.autoplay.disarm();
                return;
            }
        };
        if !self.autoplay.is_armed() {
            self.autoplay.arm(now_ms, delay);
        }
    }

    fn request(
        &mut self,
        target: usize,
        direction: Direction,
        now_ms: u64,
        source: TransitionSource,
    ) -> bool {
        if !self.mounted {
            return false;
        }
        self.now_ms = now_ms;
        if !self.engine.request_transition(target, direction, now_ms) {
            return false;
        }
        ctrace!(to = target, source = ?source, "transition started");
        self.source = Some(source);
        // A drag in progress or still snapping back ends with the flip.
        self.gesture.reset();
        self.refresh_autoplay(now_ms);
        true
    }

    /// Requests a transition to `target` rotating in `direction`.
    ///
    /// Returns `false` when a transition is already in flight (the request is dropped, not
    /// queued), when the list is empty, or after unmount. `target` must be in range.
    pub fn request_transition(&mut self, target: usize, direction: Direction, now_ms: u64) -> bool {
        let accepted = self.request(target, direction, now_ms, TransitionSource::Navigation);
        if accepted {
            self.notify();
        }
        accepted
    }

    /// Navigates to `target` (pagination dots).
    ///
    /// The direction compares indexes, not circular distance: any target at or after the
    /// current index rotates forward.
    pub fn go_to(&mut self, target: usize, now_ms: u64) -> bool {
        if self.is_empty() {
            return false;
        }
        if target >= self.len() {
            cwarn!(to = target, count = self.len(), "go_to: target out of range");
            return false;
        }
        let direction = if target >= self.current_index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.request_transition(target, direction, now_ms)
    }

    /// Navigates to the next card, wrapping around (arrow button).
    pub fn next(&mut self, now_ms: u64) -> bool {
        match Direction::Forward.step(self.current_index(), self.len()) {
            Some(target) => self.go_to(target, now_ms),
            None => false,
        }
    }

    /// Navigates to the previous card, wrapping around (arrow button).
    ///
    /// Uses [`Carousel::go_to`], so stepping back from index 0 to the last card rotates
    /// forward.
    pub fn prev(&mut self, now_ms: u64) -> bool {
        match Direction::Backward.step(self.current_index(), self.len()) {
            Some(target) => self.go_to(target, now_ms),
            None => false,
        }
    }

    /// Pointer/touch down at `x`. Ignored while a transition is in flight.
    pub fn on_drag_start(&mut self, x: f32, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.now_ms = now_ms;
        if !self.gesture.on_drag_start(x, &self.engine) {
            return false;
        }
        self.refresh_autoplay(now_ms);
        self.notify();
        true
    }

    /// Pointer/touch move to `x`. Returns the live drag offset, or `None` without an active drag.
    pub fn on_drag_move(&mut self, x: f32) -> Option<f32> {
        let offset = self.gesture.on_drag_move(x)?;
        self.notify();
        Some(offset)
    }

    /// Pointer/touch up at `x`. Returns `None` without an active drag.
    pub fn on_drag_end(&mut self, x: f32, now_ms: u64) -> Option<DragOutcome> {
        self.now_ms = now_ms;
        let outcome = self.gesture.on_drag_end(
            x,
            self.options.commit_threshold,
            self.options.snap_back_duration_ms,
            now_ms,
            &mut self.engine,
        )?;
        if let DragOutcome::Commit { accepted: true, .. } = outcome {
            self.source = Some(TransitionSource::Gesture);
        }
        self.refresh_autoplay(now_ms);
        self.notify();
        Some(outcome)
    }

    /// Pointer/touch cancel: the drag snaps back without navigating.
    pub fn on_drag_cancel(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        if !self
            .gesture
            .on_drag_cancel(self.options.snap_back_duration_ms, now_ms)
        {
            return false;
        }
        self.refresh_autoplay(now_ms);
        self.notify();
        true
    }

    /// Reports the widget's viewport intersection ratio.
    ///
    /// Returns `true` when the visibility gate opened or closed.
    pub fn on_visibility(&mut self, ratio: f32, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.now_ms = now_ms;
        if !self.visibility.observe(ratio) {
            return false;
        }
        self.refresh_autoplay(now_ms);
        self.notify();
        true
    }
}
