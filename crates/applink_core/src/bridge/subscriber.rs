//! Single-slot subscriber state for the live-link feed.
//!
//! # Responsibility
//! - Hold at most one active event sink, last register wins.
//! - Forward links synchronously; drop them when nobody listens.
//!
//! # Invariants
//! - The slot never holds more than one sink.
//! - Registration while occupied replaces the prior sink silently.
//! - Dropped links are never queued or replayed.
//!
//! # See also
//! - docs/architecture/deeplink-contract.md

use crate::model::link::DeepLink;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receiving end of the publish-subscribe channel.
///
/// The Flutter deployment implements this with the generated stream glue;
/// the CLI probe and tests supply their own sinks.
pub trait EventSink: Send + Sync {
    /// Delivers one newly observed link.
    fn success(&self, link: DeepLink);

    /// Signals that no further links will be delivered.
    fn end_of_stream(&self) {}
}

/// Observable state of the subscription side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// No sink registered; links are dropped.
    Unsubscribed,
    /// Exactly one sink registered; links are forwarded.
    Subscribed,
}

/// Mutable single-occupant sink holder.
///
/// Host delivery is serial, but the slot carries its own exclusive-access
/// guard so a multi-threaded embedder cannot observe a torn update.
#[derive(Default)]
pub struct SubscriberSlot {
    sink: Mutex<Option<Arc<dyn EventSink>>>,
}

impl SubscriberSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sink` as the sole subscriber.
    ///
    /// Returns `true` when a prior subscriber was displaced.
    pub fn subscribe(&self, sink: Arc<dyn EventSink>) -> bool {
        self.guard().replace(sink).is_some()
    }

    /// Clears the slot without notifying the occupant. Idempotent.
    pub fn unsubscribe(&self) {
        self.guard().take();
    }

    /// Signals end of stream to the occupant, then clears the slot.
    pub fn close(&self) {
        let sink = self.guard().take();
        if let Some(sink) = sink {
            sink.end_of_stream();
        }
    }

    pub fn state(&self) -> SubscriptionState {
        if self.guard().is_some() {
            SubscriptionState::Subscribed
        } else {
            SubscriptionState::Unsubscribed
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.state() == SubscriptionState::Subscribed
    }

    /// Forwards `link` to the current subscriber.
    ///
    /// Returns `false` when the slot is empty; the link is discarded.
    /// The sink callback runs outside the guard, so a subscriber may call
    /// back into the slot from its own delivery.
    pub fn forward(&self, link: DeepLink) -> bool {
        let sink = self.guard().clone();
        match sink {
            Some(sink) => {
                sink.success(link);
                true
            }
            None => false,
        }
    }

    fn guard(&self) -> MutexGuard<'_, Option<Arc<dyn EventSink>>> {
        // A poisoned guard only means a sink panicked mid-delivery; the slot
        // itself stays structurally valid.
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventSink, SubscriberSlot, SubscriptionState};
    use crate::model::link::DeepLink;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<String>>,
        closed: Mutex<bool>,
    }

    impl RecordingSink {
        fn received(&self) -> Vec<String> {
            self.received.lock().unwrap().clone()
        }

        fn is_closed(&self) -> bool {
            *self.closed.lock().unwrap()
        }
    }

    impl EventSink for RecordingSink {
        fn success(&self, link: DeepLink) {
            self.received.lock().unwrap().push(link.into_string());
        }

        fn end_of_stream(&self) {
            *self.closed.lock().unwrap() = true;
        }
    }

    fn link(url: &str) -> DeepLink {
        DeepLink::from_raw(url).expect("test URLs are non-blank")
    }

    #[test]
    fn starts_unsubscribed_and_drops_links() {
        let slot = SubscriberSlot::new();
        assert_eq!(slot.state(), SubscriptionState::Unsubscribed);
        assert!(!slot.forward(link("myapp://dropped")));
    }

    #[test]
    fn forwards_to_the_registered_sink() {
        let slot = SubscriberSlot::new();
        let sink = Arc::new(RecordingSink::default());
        assert!(!slot.subscribe(sink.clone()));

        assert!(slot.forward(link("myapp://cart")));
        assert_eq!(sink.received(), vec!["myapp://cart".to_string()]);
    }

    #[test]
    fn last_registration_wins() {
        let slot = SubscriberSlot::new();
        let first = Arc::new(RecordingSink::default());
        let second = Arc::new(RecordingSink::default());

        slot.subscribe(first.clone());
        assert!(slot.subscribe(second.clone()));

        slot.forward(link("myapp://cart"));
        assert!(first.received().is_empty());
        assert_eq!(second.received(), vec!["myapp://cart".to_string()]);
    }

    #[test]
    fn displaced_sink_is_not_notified() {
        let slot = SubscriberSlot::new();
        let first = Arc::new(RecordingSink::default());
        slot.subscribe(first.clone());
        slot.subscribe(Arc::new(RecordingSink::default()));
        assert!(!first.is_closed());
    }

    #[test]
    fn unsubscribe_clears_without_end_of_stream() {
        let slot = SubscriberSlot::new();
        let sink = Arc::new(RecordingSink::default());
        slot.subscribe(sink.clone());

        slot.unsubscribe();
        assert_eq!(slot.state(), SubscriptionState::Unsubscribed);
        assert!(!sink.is_closed());
        assert!(!slot.forward(link("myapp://late")));
        assert!(sink.received().is_empty());
    }

    #[test]
    fn close_signals_end_of_stream_once() {
        let slot = SubscriberSlot::new();
        let sink = Arc::new(RecordingSink::default());
        slot.subscribe(sink.clone());

        slot.close();
        assert!(sink.is_closed());
        assert_eq!(slot.state(), SubscriptionState::Unsubscribed);

        // A second close on the empty slot is a no-op.
        slot.close();
    }
}
