use crate::{ScrollEvent, Settle};

/// Default quiescence delay before a scroll gesture is considered finished.
///
/// Scroll events on touch devices can be spread out; anything much lower than this starts to
/// split a single fling into several gestures.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Where the reconciler is in the scroll/settle cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A user scroll is in progress; the settle timer restarts on every event.
    Scrolling,
    /// A new resting index was committed and the container is being re-centred. The next
    /// scroll event is ours and will be discarded.
    Settling,
}

/// Debounced resting index reconciliation.
///
/// This type holds no geometry. Feed it scroll events together with a tracker closure, and poll
/// [`Reconciler::update`] with the current time; it decides when a gesture has settled and
/// whether the tracked slide should become the new resting index.
#[derive(Clone, Debug)]
pub struct Reconciler {
    phase: Phase,
    settle_delay_ms: u64,
    current_index: Option<usize>,
    ignore_programmatic_scroll: bool,
    last_scroll_event_ms: Option<u64>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY_MS)
    }
}

impl Reconciler {
    /// The first scroll event is expected to come from the initial layout, so it starts out
    /// ignored.
    pub fn new(settle_delay_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            settle_delay_ms,
            current_index: None,
            ignore_programmatic_scroll: true,
            last_scroll_event_ms: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    pub fn set_settle_delay_ms(&mut self, delay_ms: u64) {
        self.settle_delay_ms = delay_ms;
    }

    /// The logical index last computed from the scroll position, if a gesture is in progress.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_ignoring_programmatic_scroll(&self) -> bool {
        self.ignore_programmatic_scroll
    }

    /// Must be called right before the owner of the scroll container repositions it.
    pub fn mark_programmatic_scroll(&mut self) {
        self.ignore_programmatic_scroll = true;
    }

    /// Clears the ignore flag as if the programmatic scroll event had been observed.
    ///
    /// For containers that do not emit an event for programmatic writes (or when the write did
    /// not move the container).
    pub fn acknowledge_programmatic_scroll(&mut self) {
        self.ignore_programmatic_scroll = false;
        if self.phase == Phase::Settling {
            self.phase = Phase::Idle;
        }
    }

    /// Handles one scroll event reported by the host at `now_ms`.
    ///
    /// `track` is only invoked for user-driven events.
    pub fn on_scroll_event(
        &mut self,
        now_ms: u64,
        track: impl FnOnce() -> Option<usize>,
    ) -> ScrollEvent {
        if self.ignore_programmatic_scroll {
            self.acknowledge_programmatic_scroll();
            ltrace!(now_ms, "Reconciler: ignored programmatic scroll");
            return ScrollEvent::Ignored;
        }

        let Some(index) = track() else {
            return ScrollEvent::Skipped;
        };

        self.current_index = Some(index);
        self.last_scroll_event_ms = Some(now_ms);
        self.phase = Phase::Scrolling;
        ScrollEvent::Tracked(index)
    }

    /// The time at which the current gesture settles unless another scroll event arrives.
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        if self.phase != Phase::Scrolling {
            return None;
        }
        self.last_scroll_event_ms
            .map(|last| last.saturating_add(self.settle_delay_ms))
    }

    /// Checks for quiescence at `now_ms`.
    ///
    /// On [`Settle::Committed`] the caller must adopt the index as its resting index and
    /// re-center the container; the next scroll event is already marked as programmatic.
    pub fn update(&mut self, now_ms: u64, resting_index: usize) -> Settle {
        let Some(deadline) = self.settle_deadline_ms() else {
            return Settle::Pending;
        };
        if now_ms < deadline {
            return Settle::Pending;
        }

        self.phase = Phase::Settling;
        self.last_scroll_event_ms = None;
        match self.current_index.take() {
            Some(index) if index != resting_index => {
                self.ignore_programmatic_scroll = true;
                ldebug!(from = resting_index, to = index, "Reconciler: commit");
                Settle::Committed(index)
            }
            _ => {
                self.phase = Phase::Idle;
                ltrace!(resting_index, "Reconciler: settled on resting index");
                Settle::Unchanged
            }
        }
    }

    /// Marks a commit that bypassed the tracker (e.g. jumping straight to a slide).
    pub fn commit_programmatic(&mut self) {
        self.current_index = None;
        self.last_scroll_event_ms = None;
        self.ignore_programmatic_scroll = true;
        self.phase = Phase::Settling;
    }

    /// Drops any in-progress gesture without committing it.
    pub fn abandon(&mut self) {
        self.current_index = None;
        self.last_scroll_event_ms = None;
        if self.phase == Phase::Scrolling {
            self.phase = Phase::Idle;
        }
    }
}
