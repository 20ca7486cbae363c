/// Transition phase of the carousel.
///
/// A transition always walks `Idle -> Exiting -> Entering -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// The current card is animating out. `current_index` still points at it.
    Exiting,
    /// The pending card has become current and is animating in.
    Entering,
}

impl Phase {
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Rotation sense of a transition.
///
/// `Forward` moves to the next index (a leftward swipe), `Backward` to the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1.0` for `Forward`, `-1.0` for `Backward`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Wraps `index` one step in this direction over `count` items.
    ///
    /// Returns `None` when `count == 0`.
    pub fn step(self, index: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(match self {
            Self::Forward => (index % count + 1) % count,
            Self::Backward => (index % count + count - 1) % count,
        })
    }
}

/// How the widget is laid out.
///
/// Only `Compact` (a single rotating card) autoplays; `Grid` shows every card at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationMode {
    #[default]
    Compact,
    Grid,
}

/// Whether the visibility gate closes again after the widget leaves the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityPolicy {
    /// Open permanently after the first viewport entry for the lifetime of the mount.
    #[default]
    Latch,
    /// Follow the viewport: autoplay is suspended whenever the widget is out of view.
    Track,
}

/// Input device that produced a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
}

pub const MOUSE_COMMIT_THRESHOLD: f32 = 60.0;
pub const TOUCH_COMMIT_THRESHOLD: f32 = 50.0;

impl PointerKind {
    /// Default release distance (px) past which a drag from this device commits.
    pub fn default_commit_threshold(self) -> f32 {
        match self {
            Self::Mouse => MOUSE_COMMIT_THRESHOLD,
            Self::Touch => TOUCH_COMMIT_THRESHOLD,
        }
    }
}

/// Which input channel asked for a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionSource {
    Autoplay,
    Gesture,
    Navigation,
}

/// A phase boundary crossed by the transition engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Deadline at which the boundary was crossed (not the tick that observed it).
    pub at_ms: u64,
    pub current_index: usize,
}

/// Classification of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragOutcome {
    /// Release beyond the commit threshold; a transition was requested.
    Commit {
        direction: Direction,
        target: usize,
        /// Release offset; renderers start the exit rotation from the dragged pose.
        offset: f32,
        /// Whether the transition engine accepted the request.
        accepted: bool,
    },
    /// Release within the threshold; the card snaps back from `offset`.
    Cancel { offset: f32 },
}

/// Everything a renderer needs to position the current and upcoming card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub count: usize,
    pub current_index: usize,
    pub pending_index: Option<usize>,
    pub phase: Phase,
    pub direction: Direction,
    /// Input channel that started the in-flight transition; `None` when idle.
    pub source: Option<TransitionSource>,
    /// Horizontal drag displacement. While snapping back this holds the release offset.
    pub drag_offset: f32,
    pub is_dragging: bool,
    pub is_snapping_back: bool,
    /// Progress of the current phase (or snap-back) in `[0, 1]`; `0` when idle.
    pub progress: f32,
}

impl CarouselSnapshot {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Generation counter identifying one mount of a carousel.
///
/// Hosts that capture callbacks (timers, animation frames) should store the epoch and check
/// [`crate::Carousel::is_current`] before acting on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountEpoch(pub u64);
