// SPDX-License-Identifier: MPL-2.0
//! Scoped event subscriptions.
//!
//! Each subscriber gets its own unbounded channel. Dropping a [`Subscription`]
//! closes the channel, and the bus forgets closed listeners on the next emit,
//! so a component only needs to drop its subscription to stop listening.

use super::{PlayerEvent, PlayerEventType};
use tokio::sync::mpsc;

/// Identifier of a registered subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Listener {
    id: SubscriptionId,
    types: Vec<PlayerEventType>,
    sender: mpsc::UnboundedSender<PlayerEvent>,
}

/// Fan-out of player events to filtered subscribers.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for the given event types.
    pub fn subscribe(&mut self, types: &[PlayerEventType]) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            types: types.to_vec(),
            sender,
        });
        tracing::trace!(?id, ?types, "player subscription added");
        Subscription { id, receiver }
    }

    /// Removes a subscription explicitly.
    ///
    /// Returns `false` if the bus no longer knew about it.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != subscription.id);
        before != self.listeners.len()
    }

    /// Delivers `event` to every open listener interested in its type.
    ///
    /// Returns the number of listeners that received it.
    pub fn emit(&mut self, event: &PlayerEvent) -> usize {
        let event_type = event.event_type();
        let mut delivered = 0;
        self.listeners.retain(|listener| {
            if listener.sender.is_closed() {
                tracing::trace!(id = ?listener.id, "pruning closed player subscription");
                return false;
            }
            if listener.types.contains(&event_type) {
                if listener.sender.send(event.clone()).is_err() {
                    return false;
                }
                delivered += 1;
            }
            true
        });
        delivered
    }

    /// Number of listeners whose subscription is still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|l| !l.sender.is_closed())
            .count()
    }
}

/// Receiving end of a bus registration.
///
/// Events queue up until drained with [`Subscription::try_next`] or
/// [`Subscription::drain`]. Dropping it ends the registration.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: mpsc::UnboundedReceiver<PlayerEvent>,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns the next queued event without blocking.
    pub fn try_next(&mut self) -> Option<PlayerEvent> {
        self.receiver.try_recv().ok()
    }

    /// Takes every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<PlayerEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_only_receives_requested_types() {
        let mut bus = EventBus::new();
        let mut sub = bus.subscribe(&[PlayerEventType::Play, PlayerEventType::Pause]);

        bus.emit(&PlayerEvent::Play);
        bus.emit(&PlayerEvent::LoadStart);
        bus.emit(&PlayerEvent::Pause);

        assert_eq!(sub.drain(), vec![PlayerEvent::Play, PlayerEvent::Pause]);
        assert!(sub.try_next().is_none());
    }

    #[test]
    fn emit_reports_delivery_count() {
        let mut bus = EventBus::new();
        let _a = bus.subscribe(&[PlayerEventType::Play]);
        let _b = bus.subscribe(&[PlayerEventType::Play, PlayerEventType::Pause]);

        assert_eq!(bus.emit(&PlayerEvent::Play), 2);
        assert_eq!(bus.emit(&PlayerEvent::Pause), 1);
        assert_eq!(bus.emit(&PlayerEvent::SourceChange), 0);
    }

    #[test]
    fn dropped_subscription_is_pruned() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(&[PlayerEventType::Play]);
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.emit(&PlayerEvent::Play), 0);
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let mut bus = EventBus::new();
        let keep = bus.subscribe(&[PlayerEventType::Play]);
        let remove = bus.subscribe(&[PlayerEventType::Play]);
        assert_ne!(keep.id(), remove.id());

        assert!(bus.unsubscribe(remove));
        assert_eq!(bus.listener_count(), 1);
        assert!(bus.unsubscribe(keep));
        assert_eq!(bus.listener_count(), 0);
    }
}
