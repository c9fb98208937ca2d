use log::info;
use std::time::{Duration, Instant};

pub(crate) const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(1000);
pub(crate) const DEFAULT_LINGER_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// waiting after completion was reached
    Waiting,
    /// the 100% message stays a little before the loader disappears
    Lingering,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    stage: Stage,
    deadline: Instant,
}

/// Debounced hide of the loader, polled by the ui loop.
///
/// There is at most one pending hide. It goes through two stages, the loader
/// must be hidden when [`HideTimer::poll`] returns true.
#[derive(Debug)]
pub(crate) struct HideTimer {
    hide_delay: Duration,
    linger_delay: Duration,
    pending: Option<Pending>,
}

impl Default for HideTimer {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY, DEFAULT_LINGER_DELAY)
    }
}

impl HideTimer {
    pub(crate) fn new(hide_delay: Duration, linger_delay: Duration) -> Self {
        Self {
            hide_delay,
            linger_delay,
            pending: None,
        }
    }

    /// Only affects hides scheduled afterwards.
    pub(crate) fn set_delays(&mut self, hide_delay: Duration, linger_delay: Duration) {
        self.hide_delay = hide_delay;
        self.linger_delay = linger_delay;
    }

    pub(crate) fn schedule(&mut self, now: Instant) {
        self.pending = Some(Pending {
            stage: Stage::Waiting,
            deadline: now + self.hide_delay,
        });
    }

    /// Returns true if a hide was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        while let Some(pending) = self.pending {
            if now < pending.deadline {
                return false;
            }
            match pending.stage {
                Stage::Waiting => {
                    info!("Loader removed");
                    self.pending = Some(Pending {
                        stage: Stage::Lingering,
                        deadline: pending.deadline + self.linger_delay,
                    });
                }
                Stage::Lingering => {
                    self.pending = None;
                    return true;
                }
            }
        }
        false
    }
}
