//! The session state store.

use std::sync::Mutex;

use tokio::sync::watch;

use super::events::{AuthEvent, SeqEvent};
use super::state::SessionState;
use crate::resolver::RoleResolver;

/// Holds the current [`SessionState`] for the lifetime of a client
/// session.
///
/// Mutated only by applying auth-state events and by [`logout`]. Event
/// application is last-write-wins on the event sequence: if two events
/// fire in quick succession and the older one finishes processing later,
/// the older one is discarded.
///
/// [`logout`]: SessionStore::logout
#[derive(Debug)]
pub struct SessionStore {
    resolver: RoleResolver,
    /// Sequence of the newest applied event. Guards against stale
    /// events regressing the state.
    last_seq: Mutex<u64>,
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a store in the initial (not ready) state.
    pub fn new(resolver: RoleResolver) -> Self {
        let (tx, _) = watch::channel(SessionState::initial());
        Self {
            resolver,
            last_seq: Mutex::new(0),
            tx,
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Watch for state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Apply a sequenced auth-state event.
    ///
    /// Returns whether the event was applied. A stale event (sequence at
    /// or below the newest applied one) is discarded regardless of when
    /// its processing completed. Applying any event marks the session
    /// ready.
    pub fn apply(&self, event: SeqEvent) -> bool {
        let mut last_seq = self.last_seq.lock().expect("session store lock poisoned");
        if event.seq <= *last_seq {
            tracing::debug!(seq = event.seq, newest = *last_seq, "Discarding stale auth event");
            return false;
        }
        *last_seq = event.seq;

        let next = match event.event {
            AuthEvent::SignedIn(identity) => {
                let role = self.resolver.resolve(&identity.email);
                SessionState {
                    identity: Some(identity),
                    role: Some(role),
                    ready: true,
                }
            }
            AuthEvent::SignedOut => SessionState {
                identity: None,
                role: None,
                ready: true,
            },
        };

        self.tx.send_replace(next);
        true
    }

    /// Explicitly clear the session.
    ///
    /// `fence` is the bus's sequence at the time of the logout (see
    /// [`AuthEventBus::current_seq`]); any event published at or before
    /// it is stale afterwards and will be discarded by [`apply`], so an
    /// in-flight sign-in cannot resurrect the cleared session.
    ///
    /// Idempotent: logging out an already signed-out session is a no-op,
    /// not an error. The state is left ready.
    ///
    /// [`AuthEventBus::current_seq`]: super::events::AuthEventBus::current_seq
    /// [`apply`]: SessionStore::apply
    pub fn logout(&self, fence: u64) {
        let mut last_seq = self.last_seq.lock().expect("session store lock poisoned");
        if fence > *last_seq {
            *last_seq = fence;
        }
        self.tx.send_if_modified(|state| {
            let cleared = SessionState {
                identity: None,
                role: None,
                ready: true,
            };
            if *state == cleared {
                false
            } else {
                *state = cleared;
                true
            }
        });
    }

    /// The role resolver backing this store.
    pub fn resolver(&self) -> &RoleResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::AdminAllowlist;
    use crate::session::events::AuthEventBus;
    use crate::session::state::Identity;
    use streamhub_entity::user::Role;

    fn store() -> SessionStore {
        SessionStore::new(RoleResolver::new(AdminAllowlist::new(["admin@example.com"])))
    }

    fn signed_in(seq: u64, email: &str) -> SeqEvent {
        SeqEvent {
            seq,
            event: AuthEvent::SignedIn(Identity::new(email, "tok")),
        }
    }

    #[test]
    fn starts_not_ready() {
        let store = store();
        let state = store.current();
        assert!(!state.ready);
        assert!(state.identity.is_none());
    }

    #[test]
    fn sign_in_derives_role_and_marks_ready() {
        let store = store();
        assert!(store.apply(signed_in(1, "admin@example.com")));

        let state = store.current();
        assert!(state.ready);
        assert_eq!(state.role, Some(Role::Admin));

        assert!(store.apply(signed_in(2, "user@example.com")));
        assert_eq!(store.current().role, Some(Role::User));
    }

    #[test]
    fn stale_event_completing_late_is_discarded() {
        let store = store();
        // E2 (newer) finishes processing before E1 (older).
        assert!(store.apply(signed_in(2, "admin@example.com")));
        assert!(!store.apply(signed_in(1, "user@example.com")));

        let state = store.current();
        assert_eq!(state.identity.as_ref().unwrap().email, "admin@example.com");
        assert_eq!(state.role, Some(Role::Admin));
    }

    #[test]
    fn failed_restore_still_marks_ready() {
        let store = store();
        assert!(store.apply(SeqEvent {
            seq: 1,
            event: AuthEvent::SignedOut,
        }));
        let state = store.current();
        assert!(state.ready);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = store();
        store.apply(signed_in(1, "admin@example.com"));

        store.logout(1);
        let once = store.current();
        store.logout(1);
        let twice = store.current();

        assert_eq!(once, twice);
        assert!(once.ready);
        assert!(once.identity.is_none());
        assert!(once.role.is_none());
    }

    #[tokio::test]
    async fn logout_fences_out_an_in_flight_sign_in() {
        let store = store();
        let bus = AuthEventBus::new();
        let mut rx = bus.subscribe();

        // Sign-in published before the logout, applied after it.
        bus.publish(AuthEvent::SignedIn(Identity::new("user@example.com", "tok")));
        let in_flight = rx.recv().await.unwrap();

        store.logout(bus.current_seq());

        assert!(!store.apply(in_flight));
        let state = store.current();
        assert!(state.ready);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let store = store();
        let mut rx = store.subscribe();

        store.apply(signed_in(1, "user@example.com"));
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_authenticated());
    }
}
