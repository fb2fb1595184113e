/// Handle to a scheduled one-shot callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer removed from the queue, ready to fire.
pub struct DueTimer<C> {
    pub id: TimerId,
    pub due_ms: u64,
    pub callback: Box<dyn FnOnce(&mut C)>,
}

struct TimerEntry<C> {
    id: TimerId,
    due_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce(&mut C)>,
}

/// One-shot timer queue over a virtual clock the owner advances.
///
/// Timers fire in `(due time, scheduling order)` order; the queue itself
/// never reads a wall clock.
pub struct TimerQueue<C> {
    entries: Vec<TimerEntry<C>>,
    next_seq: u64,
}

impl<C> TimerQueue<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: u64, callback: impl FnOnce(&mut C) + 'static) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = TimerId(seq);
        self.entries.push(TimerEntry {
            id,
            due_ms,
            seq,
            callback: Box::new(callback),
        });
        id
    }

    /// Cancel a pending timer. Returns `true` if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove and return the next timer due at or before `now_ms`, earliest
    /// `(due, seq)` first. Callers loop on this so that callbacks scheduling
    /// further timers inside the same window still fire in order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<DueTimer<C>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.entries.remove(index);
        Some(DueTimer {
            id: entry.id,
            due_ms: entry.due_ms,
            callback: entry.callback,
        })
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for TimerQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
