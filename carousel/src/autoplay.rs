/// Idle timer that asks for a forward transition once `delay_ms` passes without interaction.
///
/// At most one deadline is ever armed; re-arming replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayTimer {
    deadline: Option<u64>,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        let deadline = now_ms.saturating_add(delay_ms.max(1));
        ctrace!(deadline, "autoplay armed");
        self.deadline = Some(deadline);
    }

    pub fn disarm(&mut self) {
        if self.deadline.take().is_some() {
            ctrace!("autoplay disarmed");
        }
    }

    /// Consumes the deadline if it has passed, returning it.
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}
