use crate::VisibilityPolicy;

/// Tracks whether the widget has entered the viewport, gating autoplay.
///
/// The host feeds intersection ratios (e.g. from an `IntersectionObserver`). With
/// [`VisibilityPolicy::Latch`] the gate opens on the first entry and never closes again for
/// the mount; with [`VisibilityPolicy::Track`] it follows the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    policy: VisibilityPolicy,
    threshold: f32,
    open: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f32, policy: VisibilityPolicy) -> Self {
        Self {
            policy,
            threshold,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, threshold: f32, policy: VisibilityPolicy) {
        self.threshold = threshold;
        self.policy = policy;
    }

    /// Reports the current intersection ratio. Returns `true` when the gate opened or closed.
    pub fn observe(&mut self, ratio: f32) -> bool {
        let visible = ratio > 0.0 && ratio >= self.threshold;
        let next = match self.policy {
            VisibilityPolicy::Latch => self.open || visible,
            VisibilityPolicy::Track => visible,
        };
        if next == self.open {
            return false;
        }
        self.open = next;
        cdebug!(ratio, open = next, policy = ?self.policy, "visibility gate changed");
        true
    }

    /// Closes the gate, e.g. for a remount.
    pub fn reset(&mut self) {
        self.open = false;
    }
}
