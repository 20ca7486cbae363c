use alloc::sync::Arc;

use crate::{CarouselSnapshot, PhaseChange, PointerKind, PresentationMode, VisibilityPolicy};

/// A callback fired when the observable carousel state changes.
pub type OnChangeCallback = Arc<dyn Fn(&CarouselSnapshot) + Send + Sync>;

/// A callback fired when `current_index` changes. Arguments are `(from, to)`.
///
/// This fires at the `Exiting -> Entering` boundary, i.e. exactly once per transition.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// A callback fired for every phase boundary crossed.
pub type OnPhaseChangeCallback = Arc<dyn Fn(PhaseChange) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct CarouselOptions {
    /// Duration of the exit animation. The index swap happens when it elapses.
    pub exit_duration_ms: u64,
    /// Duration of the enter animation.
    pub enter_duration_ms: u64,
    /// Duration of the snap-back after a cancelled drag.
    pub snap_back_duration_ms: u64,

    /// Idle delay before autoplay requests a forward transition. `None` disables autoplay.
    pub autoplay_delay_ms: Option<u64>,

    /// Minimum release distance (px, exclusive) for a drag to commit.
    pub commit_threshold: f32,

    pub presentation: PresentationMode,

    /// Intersection ratio at which the widget counts as visible.
    pub visibility_threshold: f32,
    pub visibility_policy: VisibilityPolicy,

    pub on_change: Option<OnChangeCallback>,
    pub on_index_change: Option<OnIndexChangeCallback>,
    pub on_phase_change: Option<OnPhaseChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            exit_duration_ms: self.exit_duration_ms,
            enter_duration_ms: self.enter_duration_ms,
            snap_back_duration_ms: self.snap_back_duration_ms,
            autoplay_delay_ms: self.autoplay_delay_ms,
            commit_threshold: self.commit_threshold,
            presentation: self.presentation,
            visibility_threshold: self.visibility_threshold,
            visibility_policy: self.visibility_policy,
            on_change: self.on_change.clone(),
            on_index_change: self.on_index_change.clone(),
            on_phase_change: self.on_phase_change.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    /// Creates the default options: 350ms exit, 400ms enter,
    /// 300ms snap-back, 5s autoplay, 60px commit threshold, 10% visibility.
    pub fn new() -> Self {
        Self {
            exit_duration_ms: 350,
            enter_duration_ms: 400,
            snap_back_duration_ms: 300,
            autoplay_delay_ms: Some(5_000),
            commit_threshold: PointerKind::Mouse.default_commit_threshold(),
            presentation: PresentationMode::Compact,
            visibility_threshold: 0.1,
            visibility_policy: VisibilityPolicy::Latch,
            on_change: None,
            on_index_change: None,
            on_phase_change: None,
        }
    }

    pub fn with_durations(mut self, exit_duration_ms: u64, enter_duration_ms: u64) -> Self {
        self.exit_duration_ms = exit_duration_ms;
        self.enter_duration_ms = enter_duration_ms;
        self
    }

    pub fn with_snap_back_duration_ms(mut self, duration_ms: u64) -> Self {
        self.snap_back_duration_ms = duration_ms;
        self
    }

    pub fn with_autoplay_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        self.autoplay_delay_ms = delay_ms;
        self
    }

    pub fn with_commit_threshold(mut self, threshold: f32) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Uses the default threshold for `kind` (60px mouse, 50px touch).
    pub fn with_pointer_kind(mut self, kind: PointerKind) -> Self {
        self.commit_threshold = kind.default_commit_threshold();
        self
    }

    pub fn with_presentation(mut self, presentation: PresentationMode) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn with_visibility(mut self, threshold: f32, policy: VisibilityPolicy) -> Self {
        self.visibility_threshold = threshold;
        self.visibility_policy = policy;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CarouselSnapshot) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_phase_change(
        mut self,
        on_phase_change: Option<impl Fn(PhaseChange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_phase_change = on_phase_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("exit_duration_ms", &self.exit_duration_ms)
            .field("enter_duration_ms", &self.enter_duration_ms)
            .field("snap_back_duration_ms", &self.snap_back_duration_ms)
            .field("autoplay_delay_ms", &self.autoplay_delay_ms)
            .field("commit_threshold", &self.commit_threshold)
            .field("presentation", &self.presentation)
            .field("visibility_threshold", &self.visibility_threshold)
            .field("visibility_policy", &self.visibility_policy)
            .finish_non_exhaustive()
    }
}
