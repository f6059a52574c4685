use crate::match_ctl::MatchPhase;

/// What a scheduled entry does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// One second elapsed on the round clock.
    RoundClockTick,
    /// The "who scored" message has been shown long enough.
    FreezeElapsed,
    /// The host may resume physics integration.
    ResumePhysics,
    /// Show the next pre-round countdown number.
    CountdownStep(u8),
    /// Show "Go!".
    CountdownGo,
    /// Tear the countdown display down and start the round.
    CountdownDone,
    /// Invincibility window expired for this entity.
    InvincibilityEnd(hecs::Entity),
}

/// A deferred event. `phase` records the match phase the event was
/// issued for; tagged entries are discarded at dispatch if the match has
/// since moved on, untagged entries always fire.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    pub due: f32,
    pub phase: Option<MatchPhase>,
    pub kind: EventKind,
}

/// Explicit scheduled-event queue standing in for host-side delayed
/// callbacks. Replacing chained callbacks with phase-tagged entries
/// keeps a superseded timer from firing into a later game phase.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an entry that fires regardless of phase changes.
    pub fn schedule(&mut self, due: f32, kind: EventKind) {
        self.entries.push(ScheduledEvent {
            due,
            phase: None,
            kind,
        });
    }

    /// Schedule an entry valid only while `phase` is current.
    pub fn schedule_in_phase(&mut self, due: f32, phase: MatchPhase, kind: EventKind) {
        self.entries.push(ScheduledEvent {
            due,
            phase: Some(phase),
            kind,
        });
    }

    /// Drop every entry tagged with `phase`. Idempotent; dropping a
    /// phase with no entries is fine.
    pub fn cancel_phase(&mut self, phase: MatchPhase) {
        self.entries.retain(|e| e.phase != Some(phase));
    }

    /// Drop everything, tagged or not.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return all entries due at `now`, earliest first.
    pub fn drain_due(&mut self, now: f32) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        self.entries.retain(|e| {
            if e.due <= now {
                due.push(*e);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
