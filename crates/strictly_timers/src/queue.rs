//! Scheduler trait and the virtual-clock timer queue.

use std::time::Duration;

use derive_more::Display;
use tracing::{debug, instrument, trace};

/// Handle for a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("timer#{}", _0)]
pub struct TimerId(u64);

/// Something that can deliver an event after a delay.
///
/// Implementations must deliver events in deadline order and must never
/// deliver an event whose timer was cancelled.
pub trait Scheduler<E> {
    /// Delivers `event` once, `delay` from now.
    fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId;

    /// Delivers `event` every `period`, starting `period` from now.
    fn schedule_repeating(&mut self, period: Duration, event: E) -> TimerId;

    /// Cancels a timer. Returns `false` if it had already fired or was unknown.
    fn cancel(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    event: E,
}

/// Timer queue driven by an explicit virtual clock.
///
/// The clock only moves when [`TimerQueue::advance`] or
/// [`TimerQueue::advance_with`] is called.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: Clone + std::fmt::Debug> TimerQueue<E> {
    /// Creates an empty queue with the clock at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still armed.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the timer is still armed.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Advances the clock, returning every event that came due, in order.
    ///
    /// Use [`TimerQueue::advance_with`] instead when handlers may cancel or
    /// schedule timers while the batch is being delivered.
    #[instrument(skip(self))]
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let mut fired = Vec::new();
        self.advance_with(by, |_, event| fired.push(event));
        fired
    }

    /// Advances the clock, handing each due event to `dispatch` as it fires.
    ///
    /// The clock sits at the event's deadline while `dispatch` runs, so timers
    /// scheduled from inside the handler are relative to that deadline. Timers
    /// cancelled by the handler never fire. Returns the number of events fired.
    pub fn advance_with<F>(&mut self, by: Duration, mut dispatch: F) -> usize
    where
        F: FnMut(&mut Self, E),
    {
        let until = self.now + by;
        let mut fired = 0;
        while let Some(event) = self.pop_due(until) {
            dispatch(self, event);
            fired += 1;
        }
        self.now = until;
        if fired > 0 {
            debug!(fired, now_ms = self.now.as_millis() as u64, "Timers fired");
        }
        fired
    }

    /// Removes the earliest timer due at or before `until` and returns its event.
    ///
    /// Ties resolve in scheduling order. Repeating timers are re-armed.
    fn pop_due(&mut self, until: Duration) -> Option<E> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(pos, _)| pos)?;

        let deadline = self.entries[pos].deadline;
        if deadline > self.now {
            self.now = deadline;
        }

        match self.entries[pos].period {
            Some(period) => {
                let entry = &mut self.entries[pos];
                entry.deadline += period;
                trace!(id = %entry.id, "Repeating timer fired");
                Some(entry.event.clone())
            }
            None => {
                let entry = self.entries.remove(pos);
                trace!(id = %entry.id, "One-shot timer fired");
                Some(entry.event)
            }
        }
    }

    fn push(&mut self, deadline: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            period,
            event,
        });
        id
    }
}

impl<E: Clone + std::fmt::Debug> Scheduler<E> for TimerQueue<E> {
    #[instrument(skip(self))]
    fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId {
        let id = self.push(self.now + delay, None, event);
        debug!(%id, delay_ms = delay.as_millis() as u64, "Scheduled one-shot timer");
        id
    }

    #[instrument(skip(self))]
    fn schedule_repeating(&mut self, period: Duration, event: E) -> TimerId {
        // A zero period would fire forever within a single advance.
        let period = period.max(Duration::from_millis(1));
        let id = self.push(self.now + period, Some(period), event);
        debug!(%id, period_ms = period.as_millis() as u64, "Scheduled repeating timer");
        id
    }

    #[instrument(skip(self))]
    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let cancelled = self.entries.len() < before;
        debug!(%id, cancelled, "Cancel requested");
        cancelled
    }
}
