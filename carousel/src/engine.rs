use crate::{Direction, Phase, PhaseChange};

/// The transition state machine.
///
/// This is the sole owner of `current_index`, `phase` and `direction`. It serializes every
/// index change: a request is accepted only while idle, and the index swap happens exactly
/// once, when the exit phase's deadline passes.
///
/// Time is supplied by the caller (`now_ms`); the engine never schedules anything itself.
#[derive(Clone, Debug)]
pub struct TransitionEngine {
    count: usize,
    current: usize,
    pending: Option<usize>,
    phase: Phase,
    direction: Direction,
    phase_started_ms: u64,
    exit_duration_ms: u64,
    enter_duration_ms: u64,
}

impl TransitionEngine {
    pub fn new(count: usize, exit_duration_ms: u64, enter_duration_ms: u64) -> Self {
        Self {
            count,
            current: 0,
            pending: None,
            phase: Phase::Idle,
            direction: Direction::Forward,
            phase_started_ms: 0,
            exit_duration_ms,
            enter_duration_ms,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The accepted target. Present for the whole transition (also while entering, when it
    /// equals `current_index`), absent exactly when idle.
    pub fn pending_index(&self) -> Option<usize> {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    pub fn set_durations(&mut self, exit_duration_ms: u64, enter_duration_ms: u64) {
        self.exit_duration_ms = exit_duration_ms;
        self.enter_duration_ms = enter_duration_ms;
    }

    /// Requests a transition to `target`.
    ///
    /// Returns `false` (and changes nothing) when a transition is already in flight, when the
    /// list is empty, or when `target` is out of range. Range validation is the caller's job;
    /// an out-of-range target trips a debug assertion.
    pub fn request_transition(&mut self, target: usize, direction: Direction, now_ms: u64) -> bool {
        if self.count == 0 {
            return false;
        }
        if target >= self.count {
            cwarn!(to = target, count = self.count, "TransitionEngine: target out of range");
            debug_assert!(
                target < self.count,
                "TransitionEngine: target out of range (target={target}, count={})",
                self.count
            );
            return false;
        }
        if !self.phase.is_idle() {
            ctrace!(to = target, phase = ?self.phase, "transition request dropped: busy");
            return false;
        }

        self.pending = Some(target);
        self.direction = direction;
        self.phase = Phase::Exiting;
        self.phase_started_ms = now_ms;
        cdebug!(
            from = self.current,
            to = target,
            direction = ?direction,
            now_ms,
            "transition accepted"
        );
        true
    }

    /// Advances the state machine to `now_ms`, emitting every boundary crossed in order.
    ///
    /// A tick that arrives late can cross both boundaries at once; the enter phase is then
    /// timed from the exit deadline, not from `now_ms`.
    ///
    /// Returns `true` when at least one boundary was crossed.
    pub fn advance(&mut self, now_ms: u64, mut emit: impl FnMut(PhaseChange)) -> bool {
        let mut changed = false;
        loop {
            let Some(deadline) = self.phase_deadline() else {
                return changed;
            };
            if now_ms < deadline {
                return changed;
            }

            let from = self.phase;
            match from {
                Phase::Idle => return changed,
                Phase::Exiting => {
                    let Some(next) = self.pending else {
                        debug_assert!(false, "TransitionEngine: exiting without a pending index");
                        self.phase = Phase::Idle;
                        return changed;
                    };
                    self.current = next;
                    self.phase = Phase::Entering;
                }
                Phase::Entering => {
                    self.pending = None;
                    self.phase = Phase::Idle;
                }
            }
            self.phase_started_ms = deadline;
            changed = true;
            ctrace!(from = ?from, to = ?self.phase, at_ms = deadline, "phase boundary");
            emit(PhaseChange {
                from,
                to: self.phase,
                at_ms: deadline,
                current_index: self.current,
            });
        }
    }

    /// The instant the current phase ends, or `None` when idle.
    pub fn phase_deadline(&self) -> Option<u64> {
        let duration = match self.phase {
            Phase::Idle => return None,
            Phase::Exiting => self.exit_duration_ms,
            Phase::Entering => self.enter_duration_ms,
        };
        Some(self.phase_started_ms.saturating_add(duration))
    }

    /// Progress through the current phase in `[0, 1]`; `0` when idle.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let duration = match self.phase {
            Phase::Idle => return 0.0,
            Phase::Exiting => self.exit_duration_ms,
            Phase::Entering => self.enter_duration_ms,
        };
        if duration == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.phase_started_ms);
        (elapsed as f32 / duration as f32).clamp(0.0, 1.0)
    }

    /// Drops any in-flight transition without applying its pending index.
    pub fn cancel(&mut self) {
        if !self.phase.is_idle() {
            cdebug!(phase = ?self.phase, pending = ?self.pending, "transition cancelled");
        }
        self.pending = None;
        self.phase = Phase::Idle;
    }

    /// Resets to a fresh mount over `count` items.
    pub fn reset(&mut self, count: usize) {
        self.cancel();
        self.count = count;
        self.current = 0;
        self.direction = Direction::Forward;
        self.phase_started_ms = 0;
    }
}
