//! Delayed work expressed as data.
//!
//! Controllers never sleep or hold callbacks. They return [`Command`]s naming a
//! timer; whoever runs them feeds the timer back once it is due. In the browser
//! that is a `setTimeout` per command, in tests a [`TimerQueue`].

use std::time::Duration;

/// A request to start or cancel a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// Deliver `timer` after `after` has elapsed.
    Schedule { after: Duration, timer: T },

    /// Drop every pending delivery of `timer`.
    Cancel(T),
}

impl<T> Command<T> {
    pub fn schedule(after: Duration, timer: T) -> Self {
        Self::Schedule { after, timer }
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Duration,
    seq: u64,
    timer: T,
}

/// Deterministic virtual clock.
///
/// Timers fire in due-time order; timers due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: PartialEq> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether a delivery of `timer` is pending.
    pub fn contains(&self, timer: &T) -> bool {
        self.pending.iter().any(|p| &p.timer == timer)
    }

    /// Apply commands relative to the current virtual time.
    pub fn apply(&mut self, commands: impl IntoIterator<Item = Command<T>>) {
        for command in commands {
            match command {
                Command::Schedule { after, timer } => {
                    self.seq += 1;
                    self.pending.push(Pending {
                        due: self.now + after,
                        seq: self.seq,
                        timer,
                    });
                }
                Command::Cancel(timer) => self.pending.retain(|p| p.timer != timer),
            }
        }
    }

    /// Pop the next timer due at or before `deadline`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(idx, _)| idx)?;

        let pending = self.pending.remove(idx);
        self.now = self.now.max(pending.due);
        Some(pending.timer)
    }

    /// Run every timer due up to `deadline` through `fire`, applying the
    /// commands it returns, then park the clock at `deadline`.
    pub fn run_until<F>(&mut self, deadline: Duration, mut fire: F)
    where
        F: FnMut(T) -> Vec<Command<T>>,
    {
        while let Some(timer) = self.pop_due(deadline) {
            let commands = fire(timer);
            self.apply(commands);
        }
        self.now = self.now.max(deadline);
    }

    /// Same as [`TimerQueue::run_until`] with a deadline relative to now.
    pub fn advance<F>(&mut self, by: Duration, fire: F)
    where
        F: FnMut(T) -> Vec<Command<T>>,
    {
        let deadline = self.now + by;
        self.run_until(deadline, fire);
    }
}
