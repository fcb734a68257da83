//! Event queues for cross-system communication
//!
//! Systems talk through events instead of calling each other: collision
//! detection reports a contact, and the collection logic decides what that
//! contact means for the score and the next spawn.

use super::coin::CoinId;

/// A queue for events of a single type.
/// Events are collected during the tick and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
/// Add new event types as fields here.
#[derive(Debug, Default)]
pub struct Events {
    /// Player touched the live coin
    pub coin_collected: EventQueue<CoinCollectedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of tick.
    pub fn clear_all(&mut self) {
        self.coin_collected.clear();
    }
}

/// The player came into contact with a coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCollectedEvent {
    /// Which coin was touched. Only counts if this still names the coin
    /// in play; ids of already-replaced coins are ignored.
    pub coin: CoinId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_all_empties_queues() {
        let mut events = Events::new();
        events.coin_collected.send(CoinCollectedEvent {
            coin: CoinId::new(0),
        });
        assert_eq!(events.coin_collected.len(), 1);

        events.clear_all();
        assert!(events.coin_collected.is_empty());
    }
}
