//! Auth-state event stream.
//!
//! The provider-managed credential variant of the verifier pushes state
//! changes asynchronously, possibly several times per session (token
//! refresh, logout from another tab). Events are published through a
//! broadcast bus; each event carries a monotonically increasing sequence
//! number so consumers can discard stale results that complete late.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use super::state::Identity;

/// An auth-state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A credential was validated and yielded an identity.
    SignedIn(Identity),
    /// The session ended or no valid credential was found.
    SignedOut,
}

/// An [`AuthEvent`] stamped with its publication sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqEvent {
    /// Monotonically increasing per-bus sequence.
    pub seq: u64,
    /// The transition.
    pub event: AuthEvent,
}

/// Broadcast bus for auth-state events.
///
/// Subscribing returns a receiver that stops listening when dropped,
/// which is the cancellation handle: a torn-down consumer never acts on
/// events for a session it no longer renders.
#[derive(Debug)]
pub struct AuthEventBus {
    seq: AtomicU64,
    tx: broadcast::Sender<SeqEvent>,
}

impl AuthEventBus {
    /// Create a bus with a small replay buffer.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            seq: AtomicU64::new(0),
            tx,
        }
    }

    /// Publish an event, assigning it the next sequence number.
    ///
    /// Returns the assigned sequence. Publishing succeeds even with no
    /// live subscriber.
    pub fn publish(&self, event: AuthEvent) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.tx.send(SeqEvent { seq, event });
        seq
    }

    /// Subscribe to subsequent events. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> broadcast::Receiver<SeqEvent> {
        self.tx.subscribe()
    }

    /// The sequence number of the most recently published event.
    pub fn current_seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }
}

impl Default for AuthEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sequence_numbers_increase() {
        let bus = AuthEventBus::new();
        let mut rx = bus.subscribe();

        let a = bus.publish(AuthEvent::SignedOut);
        let b = bus.publish(AuthEvent::SignedIn(Identity::new("a@b.c", "tok")));
        assert!(b > a);

        assert_eq!(rx.recv().await.unwrap().seq, a);
        assert_eq!(rx.recv().await.unwrap().seq, b);
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let bus = AuthEventBus::new();
        assert_eq!(bus.publish(AuthEvent::SignedOut), 1);
        assert_eq!(bus.current_seq(), 1);
    }
}
